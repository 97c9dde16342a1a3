use super::prelude::*;

pub async fn create_operator<R>(repo: &R, operator: OperatorFields) -> Result<Operator>
where
    R: OperatorRepo + ?Sized,
{
    let operator = operator.auto_correct();
    operator.validate()?;
    let operator = repo.create_operator(operator).await?;
    log::info!("Created operator {} ({})", operator.name, operator.id);
    Ok(operator)
}

pub async fn update_operator<R>(repo: &R, id: &Id, operator: OperatorFields) -> Result<()>
where
    R: OperatorRepo + ?Sized,
{
    let operator = operator.auto_correct();
    operator.validate()?;
    repo.update_operator(id, operator).await?;
    log::info!("Updated operator {id}");
    Ok(())
}

pub async fn delete_operator<R>(repo: &R, id: &Id) -> Result<()>
where
    R: OperatorRepo + ?Sized,
{
    repo.delete_operator(id).await?;
    log::info!("Deleted operator {id}");
    Ok(())
}
