//! Seed ordering by ticket priority.

use std::cmp::Reverse;

use crate::models::{GeoTicket, Priority};

/// Returns ticket indices in the order they should be tried as seeds.
///
/// With ranking enabled, indices are stably sorted by descending priority
/// rank (ties keep input order). Disabled, the input order is returned.
///
/// # Examples
///
/// ```
/// use u_geocluster::models::Ticket;
/// use u_geocluster::clustering::rank_seeds;
///
/// let tickets = vec![
///     Ticket::new("a", 0.0, 0.0).with_priority("Low"),
///     Ticket::new("b", 0.0, 0.0),
///     Ticket::new("c", 0.0, 0.0).with_priority("Critical"),
///     Ticket::new("d", 0.0, 0.0).with_priority("Medium"),
/// ];
/// assert_eq!(rank_seeds(&tickets, true), vec![2, 3, 0, 1]);
/// assert_eq!(rank_seeds(&tickets, false), vec![0, 1, 2, 3]);
/// ```
pub fn rank_seeds<T: GeoTicket>(tickets: &[T], prioritize: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tickets.len()).collect();
    if prioritize {
        // sort_by_key is stable
        order.sort_by_key(|&i| Reverse(Priority::rank_of(tickets[i].priority())));
    }
    order
}
