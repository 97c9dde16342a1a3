use super::prelude::*;

pub async fn add_tour_image<R>(repo: &R, mut image: NewTourImage) -> Result<TourImage>
where
    R: TourImageRepo + ?Sized,
{
    image.image_url = image.image_url.trim().to_owned();
    image.validate()?;
    let image = repo.create_tour_image(image).await?;
    log::info!("Added image {} to tour {}", image.id, image.tour_id);
    Ok(image)
}

pub async fn delete_tour_image<R>(repo: &R, id: &Id) -> Result<()>
where
    R: TourImageRepo + ?Sized,
{
    repo.delete_tour_image(id).await?;
    Ok(())
}
