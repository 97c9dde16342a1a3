use futures_util::try_join;

use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_tours     : usize,
    pub upcoming_tours  : usize,
    pub active_operators: usize,
    pub new_enquiries   : usize,
    pub total_enquiries : usize,
}

impl DashboardStats {
    pub fn count(
        tours: &[TourStatus],
        operators: &[OperatorStatus],
        enquiries: &[EnquiryStatus],
    ) -> Self {
        Self {
            total_tours: tours.len(),
            upcoming_tours: tours.iter().filter(|s| **s == TourStatus::Upcoming).count(),
            active_operators: operators
                .iter()
                .filter(|s| **s == OperatorStatus::Active)
                .count(),
            new_enquiries: enquiries
                .iter()
                .filter(|s| **s == EnquiryStatus::New)
                .count(),
            total_enquiries: enquiries.len(),
        }
    }
}

/// The three tables are read concurrently.
pub async fn dashboard_stats<R>(repo: &R) -> Result<DashboardStats>
where
    R: TourRepo + OperatorRepo + EnquiryRepo + ?Sized,
{
    let (tours, operators, enquiries) = try_join!(
        repo.tour_statuses(),
        repo.operator_statuses(),
        repo.enquiry_statuses()
    )?;
    Ok(DashboardStats::count(&tours, &operators, &enquiries))
}
