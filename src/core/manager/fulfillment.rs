use crate::core::dish::Dish;
use crate::core::manager::StationManager;
use log::{debug, info};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A queued dish order awaiting fulfillment
///
/// The ticket shares the dish by reference count; the same logical dish
/// may sit in the queue several times and be registered at any number of
/// stations without duplication.
#[derive(Debug, Clone)]
pub struct OrderTicket {
    pub order_id: Uuid,
    pub dish: Arc<Dish>,
}

impl OrderTicket {
    /// Create a ticket with a freshly generated order id
    pub fn new(dish: Arc<Dish>) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            dish,
        }
    }
}

/// Outcome of one station's attempt at a queued dish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationAttempt {
    /// The dish is not registered at this station
    NotRegistered,
    /// Prepared from on-hand stock
    Prepared,
    /// Prepared after topping up from the backup reserve
    PreparedAfterReplenish,
    /// Stock was topped up from the reserve but remained insufficient
    InsufficientAfterReplenish,
    /// No ingredient could be topped up from the reserve
    ReplenishFailed,
}

impl fmt::Display for StationAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StationAttempt::NotRegistered => "dish not available here",
            StationAttempt::Prepared => "prepared",
            StationAttempt::PreparedAfterReplenish => "prepared after replenishment",
            StationAttempt::InsufficientAfterReplenish => {
                "replenished but still short on ingredients"
            }
            StationAttempt::ReplenishFailed => "unable to replenish ingredients",
        };
        write!(f, "{}", text)
    }
}

/// Trace record for a single station visited while resolving one order
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    pub station: String,
    pub outcome: StationAttempt,
}

/// Resolution of one queued order after a full station scan
#[derive(Debug, Clone)]
pub struct OrderOutcome {
    pub order_id: Uuid,
    pub dish_name: String,
    /// Stations visited in scan order, with what happened at each
    pub attempts: Vec<AttemptRecord>,
    /// The station that prepared the dish, if any did
    pub prepared_at: Option<String>,
}

impl OrderOutcome {
    fn new(order_id: Uuid, dish_name: &str) -> Self {
        Self {
            order_id,
            dish_name: dish_name.to_string(),
            attempts: Vec::new(),
            prepared_at: None,
        }
    }

    fn record(&mut self, station: &str, outcome: StationAttempt) {
        self.attempts.push(AttemptRecord {
            station: station.to_string(),
            outcome,
        });
    }

    /// Whether any station prepared this order
    pub fn prepared(&self) -> bool {
        self.prepared_at.is_some()
    }
}

/// Summary of one full pass over the order queue
#[derive(Debug, Clone, Default)]
pub struct FulfillmentReport {
    /// One outcome per order, in the order the queue was drained
    pub outcomes: Vec<OrderOutcome>,
    pub prepared_count: usize,
    pub deferred_count: usize,
}

impl FulfillmentReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the dishes deferred to the residual queue, in order
    pub fn deferred_dishes(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.prepared())
            .map(|outcome| outcome.dish_name.as_str())
            .collect()
    }
}

impl StationManager {
    /// Drain the order queue, resolving every order before the next is
    /// considered
    ///
    /// Each order visits the stations in manager order. A station without
    /// the dish registered is skipped. A station whose stock already covers
    /// the recipe prepares it on the spot. Otherwise the station gets one
    /// replenishment pass against the backup reserve, topping up each
    /// short or missing requirement by its deficit, and one retry; a
    /// station that still cannot prepare the dish is not revisited for
    /// this order. Orders no station could prepare land in a residual
    /// queue, in arrival order, which becomes the new order queue.
    pub fn process_all_dishes(&mut self) -> FulfillmentReport {
        let mut report = FulfillmentReport::new();
        let mut residual: VecDeque<OrderTicket> = VecDeque::new();

        while let Some(ticket) = self.order_queue.pop_front() {
            let dish = Arc::clone(&ticket.dish);
            let dish_name = dish.name().to_string();
            info!("preparing dish '{}'", dish_name);

            let mut outcome = OrderOutcome::new(ticket.order_id, &dish_name);

            for index in 0..self.stations.len() {
                let station_name = self.stations[index].name().to_string();
                debug!("{}: attempting to prepare '{}'", station_name, dish_name);

                if !self.stations[index].has_recipe(&dish_name) {
                    debug!(
                        "{}: dish '{}' not available here, moving to next station",
                        station_name, dish_name
                    );
                    outcome.record(&station_name, StationAttempt::NotRegistered);
                    continue;
                }

                if self.stations[index].can_fulfill(&dish_name) {
                    self.stations[index].prepare(&dish_name);
                    info!("{}: successfully prepared '{}'", station_name, dish_name);
                    outcome.prepared_at = Some(station_name.clone());
                    outcome.record(&station_name, StationAttempt::Prepared);
                    break;
                }

                // One replenishment pass: top up each short or missing
                // requirement by its deficit. A failed transfer for one
                // ingredient does not abort the rest.
                info!(
                    "{}: insufficient ingredients, replenishing from reserve",
                    station_name
                );
                let replenished = self.replenish_for_dish(index, &dish);

                if !replenished {
                    info!(
                        "{}: unable to replenish ingredients, failed to prepare '{}'",
                        station_name, dish_name
                    );
                    outcome.record(&station_name, StationAttempt::ReplenishFailed);
                    continue;
                }

                // Exactly one retry at this station after replenishment.
                if self.stations[index].prepare(&dish_name) {
                    info!(
                        "{}: successfully prepared '{}' after replenishment",
                        station_name, dish_name
                    );
                    outcome.prepared_at = Some(station_name.clone());
                    outcome.record(&station_name, StationAttempt::PreparedAfterReplenish);
                    break;
                }

                info!("{}: unable to prepare '{}'", station_name, dish_name);
                outcome.record(&station_name, StationAttempt::InsufficientAfterReplenish);
            }

            if outcome.prepared() {
                report.prepared_count += 1;
            } else {
                info!("'{}' was not prepared, deferring", dish_name);
                report.deferred_count += 1;
                residual.push_back(ticket);
            }
            report.outcomes.push(outcome);
        }

        if !residual.is_empty() {
            self.order_queue = residual;
        }
        info!(
            "all dishes processed: {} prepared, {} deferred",
            report.prepared_count, report.deferred_count
        );
        report
    }

    /// Run one fulfillment pass and hand back the residual queue
    ///
    /// The returned tickets are the orders no station could prepare, in
    /// arrival order. They also stay queued, so a later pass can pick
    /// them up after stations or the reserve are restocked.
    pub fn drain_queue(&mut self) -> Vec<OrderTicket> {
        self.process_all_dishes();
        self.order_queue.iter().cloned().collect()
    }

    /// Top up one station's stock for every requirement of a dish it is
    /// short on, returning whether any transfer succeeded
    fn replenish_for_dish(&mut self, station_index: usize, dish: &Dish) -> bool {
        let station_name = self.stations[station_index].name().to_string();
        let mut replenished = false;
        for requirement in dish.ingredients() {
            let on_hand = self.stations[station_index]
                .stock()
                .quantity(&requirement.name);
            if on_hand >= requirement.required_quantity {
                continue;
            }
            let deficit = requirement.required_quantity - on_hand;
            if self.transfer_from_reserve(&station_name, &requirement.name, deficit) {
                replenished = true;
            }
        }
        replenished
    }
}
