use super::prelude::*;

fn prepare(day: ItineraryFields) -> Result<ItineraryFields> {
    let day = day.auto_correct();
    day.validate()?;
    if day.day_number == 0 {
        return Err(Error::DayNumber);
    }
    Ok(day)
}

pub async fn add_itinerary_day<R>(repo: &R, day: ItineraryFields) -> Result<TourItinerary>
where
    R: TourItineraryRepo + ?Sized,
{
    let day = repo.create_itinerary_day(prepare(day)?).await?;
    log::info!("Added day {} to tour {}", day.day_number, day.tour_id);
    Ok(day)
}

pub async fn update_itinerary_day<R>(repo: &R, id: &Id, day: ItineraryFields) -> Result<()>
where
    R: TourItineraryRepo + ?Sized,
{
    repo.update_itinerary_day(id, prepare(day)?).await?;
    Ok(())
}

pub async fn delete_itinerary_day<R>(repo: &R, id: &Id) -> Result<()>
where
    R: TourItineraryRepo + ?Sized,
{
    repo.delete_itinerary_day(id).await?;
    Ok(())
}
