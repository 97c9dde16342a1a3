use super::prelude::*;

/// Activate or deactivate an operator.
pub async fn change_operator_status<R>(repo: &R, id: &Id, status: OperatorStatus) -> Result<()>
where
    R: OperatorRepo + ?Sized,
{
    repo.set_operator_status(id, status).await?;
    log::info!("Changed status of operator {id} to {status}");
    Ok(())
}

/// Any status can follow any other status.
pub async fn change_enquiry_status<R>(repo: &R, id: &Id, status: EnquiryStatus) -> Result<()>
where
    R: EnquiryRepo + ?Sized,
{
    repo.set_enquiry_status(id, status).await?;
    log::info!("Changed status of enquiry {id} to {status}");
    Ok(())
}
