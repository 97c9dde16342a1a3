use super::prelude::*;

/// Maximum number of tours on the home page.
pub const FEATURED_TOURS_LIMIT: usize = 6;

pub async fn load_featured_tours<R>(repo: &R) -> Result<Vec<Tour>>
where
    R: TourRepo + ?Sized,
{
    let mut tours = repo.featured_tours(FEATURED_TOURS_LIMIT).await?;
    tours.truncate(FEATURED_TOURS_LIMIT);
    Ok(tours)
}

/// A missing tour is not an error.
pub async fn load_tour<R>(repo: &R, id: &Id) -> Result<Option<Tour>>
where
    R: TourRepo + ?Sized,
{
    if !id.is_valid() {
        return Ok(None);
    }
    Ok(repo.get_tour(id).await?)
}
