use crate::games::types::{GameOutcome, RoundRecord};
use std::collections::VecDeque;

/// Bounded in-memory log of settled rounds, oldest first
#[derive(Debug, Clone)]
pub struct RoundHistory {
    records: VecDeque<RoundRecord>,
    capacity: usize,
}

impl RoundHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
        }
    }

    /// Record a round, evicting the oldest once full
    pub fn push(&mut self, record: RoundRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn latest(&self) -> Option<&RoundRecord> {
        self.records.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn wins(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == GameOutcome::Win)
            .count()
    }

    /// Serialize the retained rounds as a JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        let records: Vec<&RoundRecord> = self.iter().collect();
        serde_json::to_string_pretty(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::types::{ActionKind, DisplayedSymbols, GameMode};
    use uuid::Uuid;

    fn record(bet: u64, payout: u64) -> RoundRecord {
        RoundRecord {
            round_id: Uuid::new_v4(),
            game: GameMode::Slot,
            action: ActionKind::Spin,
            bet,
            payout,
            multiplier: (payout > 0).then(|| payout as f64 / bet as f64),
            outcome: if payout > 0 { GameOutcome::Win } else { GameOutcome::Loss },
            balance_before: 1000,
            balance_after: 1000 - bet + payout,
            reset_mid_round: false,
            displayed: DisplayedSymbols::Nothing,
            settled_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_eviction() {
        let mut history = RoundHistory::new(2);
        history.push(record(1, 0));
        history.push(record(2, 0));
        history.push(record(3, 6));

        assert_eq!(history.len(), 2);
        let bets: Vec<u64> = history.iter().map(|r| r.bet).collect();
        assert_eq!(bets, vec![2, 3]);
        assert_eq!(history.latest().unwrap().payout, 6);
        assert_eq!(history.wins(), 1);
    }

    #[test]
    fn test_json_export() {
        let mut history = RoundHistory::new(10);
        history.push(record(10, 25));

        let json: serde_json::Value = serde_json::from_str(&history.to_json().unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["payout"], 25);
        assert_eq!(json[0]["outcome"], "win");
    }
}
