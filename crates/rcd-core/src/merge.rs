//! Reconciliation of a local and a remote record
//!
//! Only timestamps are compared. The newer record wins whole; nothing from
//! the losing record survives.

use chrono::{DateTime, Utc};

use crate::config::RepoConfig;

/// Which side is authoritative after reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LocalWins,
    RemoteWins,
    Equal,
}

/// The reconciled record and the side it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub config: RepoConfig,
    pub direction: Direction,
}

/// Reconcile two records, stamping a winner with the current time.
pub fn merge(local: RepoConfig, remote: RepoConfig) -> MergeOutcome {
    merge_at(local, remote, Utc::now())
}

/// Reconcile two records as of `now`.
///
/// Equal timestamps keep `local` untouched. Otherwise the strictly newer
/// record wins and is stamped with `now`, or with its own timestamp if that
/// lies ahead of `now`, so the result never moves backwards.
pub fn merge_at(local: RepoConfig, remote: RepoConfig, now: DateTime<Utc>) -> MergeOutcome {
    if local.timestamp == remote.timestamp {
        return MergeOutcome {
            config: local,
            direction: Direction::Equal,
        };
    }

    let (winner, direction) = if local.timestamp > remote.timestamp {
        (local, Direction::LocalWins)
    } else {
        (remote, Direction::RemoteWins)
    };

    let stamp = now.max(winner.timestamp);
    MergeOutcome {
        config: winner.with_timestamp(stamp),
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn config(remote: &str, hour: u32) -> RepoConfig {
        RepoConfig::created_at(remote, at(hour))
    }

    #[test]
    fn test_equal_timestamps_keep_local() {
        let local = config("local-view", 10);
        let remote = config("remote-view", 10);

        let outcome = merge_at(local.clone(), remote, at(12));

        assert_eq!(outcome.direction, Direction::Equal);
        assert_eq!(outcome.config, local);
    }

    #[test]
    fn test_newer_local_wins() {
        let outcome = merge_at(config("local-view", 11), config("remote-view", 9), at(12));

        assert_eq!(outcome.direction, Direction::LocalWins);
        assert_eq!(outcome.config.remote, "local-view");
        assert_eq!(outcome.config.timestamp, at(12));
    }

    #[test]
    fn test_newer_remote_wins() {
        let mut remote = config("remote-view", 11);
        remote.track_renames = true;

        let outcome = merge_at(config("local-view", 9), remote, at(12));

        assert_eq!(outcome.direction, Direction::RemoteWins);
        assert_eq!(outcome.config.remote, "remote-view");
        assert!(outcome.config.track_renames);
        assert_eq!(outcome.config.timestamp, at(12));
    }

    #[test]
    fn test_winner_from_the_future_keeps_its_timestamp() {
        let ahead = at(12) + Duration::hours(3);
        let remote = RepoConfig::created_at("remote-view", ahead);

        let outcome = merge_at(config("local-view", 9), remote, at(12));

        assert_eq!(outcome.direction, Direction::RemoteWins);
        assert_eq!(outcome.config.timestamp, ahead);
    }

    #[test]
    fn test_merge_uses_wall_clock() {
        let before = Utc::now();
        let outcome = merge(config("local-view", 1), config("remote-view", 2));

        assert_eq!(outcome.direction, Direction::RemoteWins);
        assert!(outcome.config.timestamp >= before);
    }
}
