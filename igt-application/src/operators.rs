use crate::{cache::QueryCache, *};

const AFFECTED: &[Table] = &[Table::Operators];

pub async fn create_operator(
    db: &dyn Backend,
    cache: &QueryCache,
    operator: OperatorFields,
) -> Result<Operator> {
    let operator = usecases::create_operator(db, operator).await?;
    cache.invalidate_tables(AFFECTED);
    Ok(operator)
}

pub async fn update_operator(
    db: &dyn Backend,
    cache: &QueryCache,
    id: &Id,
    operator: OperatorFields,
) -> Result<()> {
    usecases::update_operator(db, id, operator).await?;
    cache.invalidate_tables(AFFECTED);
    Ok(())
}

pub async fn change_operator_status(
    db: &dyn Backend,
    cache: &QueryCache,
    id: &Id,
    status: OperatorStatus,
) -> Result<()> {
    usecases::change_operator_status(db, id, status).await?;
    cache.invalidate_tables(AFFECTED);
    Ok(())
}

pub async fn delete_operator(db: &dyn Backend, cache: &QueryCache, id: &Id) -> Result<()> {
    usecases::delete_operator(db, id).await?;
    // Tours lose their operator.
    cache.invalidate_tables(&[Table::Operators, Table::Tours]);
    Ok(())
}
