use igt_core::usecases::NewTour;

use crate::{cache::QueryCache, *};

pub async fn create_tour(db: &dyn Backend, cache: &QueryCache, tour: NewTour) -> Result<Tour> {
    let tour = usecases::create_tour(db, tour).await?;
    cache.invalidate_tables(&[Table::Tours]);
    Ok(tour)
}

pub async fn update_tour(db: &dyn Backend, cache: &QueryCache, id: &Id, tour: NewTour) -> Result<()> {
    usecases::update_tour(db, id, tour).await?;
    cache.invalidate_tables(&[Table::Tours]);
    Ok(())
}

pub async fn delete_tour(db: &dyn Backend, cache: &QueryCache, id: &Id) -> Result<()> {
    usecases::delete_tour(db, id).await?;
    cache.invalidate_tables(&[Table::Tours, Table::TourImages, Table::TourItinerary]);
    Ok(())
}

pub async fn add_tour_image(
    db: &dyn Backend,
    cache: &QueryCache,
    image: NewTourImage,
) -> Result<TourImage> {
    let image = usecases::add_tour_image(db, image).await?;
    cache.invalidate_tables(&[Table::TourImages]);
    Ok(image)
}

pub async fn delete_tour_image(db: &dyn Backend, cache: &QueryCache, id: &Id) -> Result<()> {
    usecases::delete_tour_image(db, id).await?;
    cache.invalidate_tables(&[Table::TourImages]);
    Ok(())
}

pub async fn add_itinerary_day(
    db: &dyn Backend,
    cache: &QueryCache,
    day: ItineraryFields,
) -> Result<TourItinerary> {
    let day = usecases::add_itinerary_day(db, day).await?;
    cache.invalidate_tables(&[Table::TourItinerary]);
    Ok(day)
}

pub async fn update_itinerary_day(
    db: &dyn Backend,
    cache: &QueryCache,
    id: &Id,
    day: ItineraryFields,
) -> Result<()> {
    usecases::update_itinerary_day(db, id, day).await?;
    cache.invalidate_tables(&[Table::TourItinerary]);
    Ok(())
}

pub async fn delete_itinerary_day(db: &dyn Backend, cache: &QueryCache, id: &Id) -> Result<()> {
    usecases::delete_itinerary_day(db, id).await?;
    cache.invalidate_tables(&[Table::TourItinerary]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prelude::*, tests::*};

    #[tokio::test]
    async fn new_tour_is_visible_to_visitors() {
        let fixture = Fixture::new();
        let public = fixture.public();
        let cache = QueryCache::new();
        assert!(tours(&public, &cache).await.data().unwrap().is_empty());

        let mut tour = new_tour("Goa Getaway");
        tour.status = TourStatus::Upcoming;
        let tour = create_tour(&*fixture.admin(), &cache, tour).await.unwrap();

        let all = tours(&public, &cache).await.data().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Goa Getaway");
        let featured = featured_tours(&public, &cache).await.data().unwrap();
        assert_eq!(featured[0].id, tour.id);
    }

    #[tokio::test]
    async fn itinerary_changes_are_reflected_in_tour_details() {
        let fixture = Fixture::new();
        let admin = fixture.admin();
        let cache = QueryCache::new();
        let tour = create_tour(&*admin, &cache, new_tour("Kerala Backwaters"))
            .await
            .unwrap();
        let details = tour_details(&admin, &cache, &tour.id).await;
        assert!(details.itinerary.is_empty());

        for (day_number, title) in [(2, "Houseboat"), (1, "Arrival")] {
            let day = ItineraryFields {
                tour_id: tour.id.clone(),
                day_number,
                title: title.into(),
                description: None,
            };
            add_itinerary_day(&*admin, &cache, day).await.unwrap();
        }
        let details = tour_details(&admin, &cache, &tour.id).await;
        assert_eq!(details.itinerary.len(), 2);

        let image = NewTourImage {
            tour_id: tour.id.clone(),
            image_url: "https://example.com/houseboat.jpg".into(),
        };
        let image = add_tour_image(&*admin, &cache, image).await.unwrap();
        let details = tour_details(&admin, &cache, &tour.id).await;
        assert_eq!(details.first_image_url(), Some("https://example.com/houseboat.jpg"));

        delete_tour_image(&*admin, &cache, &image.id).await.unwrap();
        let details = tour_details(&admin, &cache, &tour.id).await;
        assert!(details.images.is_empty());
    }

    #[tokio::test]
    async fn deleted_tour_is_gone() {
        let fixture = Fixture::new();
        let admin = fixture.admin();
        let cache = QueryCache::new();
        let tour = create_tour(&*admin, &cache, new_tour("Goa Getaway"))
            .await
            .unwrap();
        assert!(tour_details_opt(&admin, &cache, &tour.id).await.is_some());
        delete_tour(&*admin, &cache, &tour.id).await.unwrap();
        assert!(tour_details_opt(&admin, &cache, &tour.id).await.is_none());
        assert!(admin_tours(&admin, &cache).await.data().unwrap().is_empty());
    }

    #[tokio::test]
    async fn reject_day_zero() {
        let fixture = Fixture::new();
        let admin = fixture.admin();
        let cache = QueryCache::new();
        let tour = create_tour(&*admin, &cache, new_tour("Goa Getaway"))
            .await
            .unwrap();
        let day = ItineraryFields {
            tour_id: tour.id,
            day_number: 0,
            title: "Arrival".into(),
            description: None,
        };
        let err = add_itinerary_day(&*admin, &cache, day).await.unwrap_err();
        assert!(err.is_invalid_input());
    }

    async fn tour_details_opt(
        db: &std::sync::Arc<dyn Backend>,
        cache: &QueryCache,
        id: &Id,
    ) -> Option<Tour> {
        tour(db, cache, id).await.data().unwrap()
    }

    async fn tour_details(db: &std::sync::Arc<dyn Backend>, cache: &QueryCache, id: &Id) -> Tour {
        tour_details_opt(db, cache, id).await.unwrap()
    }
}
