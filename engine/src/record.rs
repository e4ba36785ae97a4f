use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Action;
use crate::table::{ForcedBets, Street};

/// Records a single player action during a hand.
/// Associates the action with the seat and the street when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index of the acting player
    pub seat: usize,
    /// The betting street when this action occurred
    pub street: Street,
    /// The action taken, with bet and raise amounts resolved to totals
    pub action: Action,
}

/// Complete record of a hand including all actions, board cards, and payouts.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Sequence number of the hand at this table, starting from 1
    pub hand_no: u32,
    /// Seat index holding the dealer button
    pub button: usize,
    /// Ante and blinds in force for this hand
    pub forced_bets: ForcedBets,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5 cards)
    #[serde(default)]
    pub board: Vec<Card>,
    /// Winning seats per pot, main pot first
    #[serde(default)]
    pub winners: Vec<Vec<usize>>,
    /// Chips paid out per seat, pot by pot
    #[serde(default)]
    pub payouts: Vec<(usize, u32)>,
    /// Timestamp when the hand was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl HandRecord {
    pub fn new(hand_no: u32, button: usize, forced_bets: ForcedBets) -> Self {
        Self {
            hand_no,
            button,
            forced_bets,
            actions: Vec::new(),
            board: Vec::new(),
            winners: Vec::new(),
            payouts: Vec::new(),
            ts: None,
        }
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends hand records to a JSONL file, one record per line.
pub struct HandLogger {
    writer: BufWriter<File>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
