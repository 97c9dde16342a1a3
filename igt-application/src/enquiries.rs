use crate::{cache::QueryCache, *};

/// Enquiries are written by anonymous visitors.
pub async fn submit_enquiry(
    db: &dyn Backend,
    cache: &QueryCache,
    enquiry: EnquiryFields,
) -> Result<()> {
    usecases::submit_enquiry(db, enquiry).await?;
    cache.invalidate_tables(&[Table::Enquiries]);
    Ok(())
}

pub async fn change_enquiry_status(
    db: &dyn Backend,
    cache: &QueryCache,
    id: &Id,
    status: EnquiryStatus,
) -> Result<()> {
    usecases::change_enquiry_status(db, id, status).await?;
    cache.invalidate_tables(&[Table::Enquiries]);
    Ok(())
}
