// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator events
// ============================================================================

use crate::domain::{EntryId, FractionOperator};
use crate::numeric::{Farrad, Fraction, KanalMarla};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculators
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Total land computed from Kanal/Marla input
    TotalLandComputed {
        land: KanalMarla,
        total: Farrad,
        timestamp: DateTime<Utc>,
    },

    /// Two Kanal/Marla amounts added
    LandAdded {
        first: KanalMarla,
        second: KanalMarla,
        result: KanalMarla,
        timestamp: DateTime<Utc>,
    },

    /// Share registered
    ShareAdded {
        id: EntryId,
        fraction: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// Share or operation entry removed
    EntryRemoved {
        id: EntryId,
        timestamp: DateTime<Utc>,
    },

    /// All share values computed
    SharesCalculated {
        total_land: Farrad,
        share_count: usize,
        sum_of_shares: Decimal,
        final_ratio: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// Fraction operation performed
    FractionOperationApplied {
        id: EntryId,
        operator: FractionOperator,
        result: Fraction,
        timestamp: DateTime<Utc>,
    },

    /// Input rejected with the user-facing reason
    CalculationRejected {
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, UI notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::CalculationRejected { reason, .. } => {
                tracing::warn!(%reason, "Calculation rejected");
            },
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}
