use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::{loaded, page, select};
use igt_core::{
    entities::*,
    options::{self, ALL},
    usecases::{filter_tours, TourCriteria},
    util::{format, sort::sorted_itinerary, whatsapp},
};
use igt_application::cache::QueryState;

const CARD_IMAGE_URL: &str = "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=600";
const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=1200";

/// Values of the enquiry form of a tour.
#[derive(Debug, Default)]
pub struct EnquiryDraft<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
    /// Why the last submission failed.
    pub error: Option<&'a str>,
}

pub fn index(email: Option<&str>, flash: Option<FlashMessage>, featured: &QueryState<Vec<Tour>>) -> Markup {
    page(
        "Group Tours",
        email,
        flash,
        html! {
            section class="hero" {
                h1 { "Discover Group Tours Departing From Your City" }
                p { "South India, Char Dham, Kashmir & more. Travel together with verified tour operators." }
                (home_search_form())
            }
            section class="featured" {
                h2 { "Upcoming Group Tours" }
                (loaded(featured, |tours| html! {
                    @if tours.is_empty() {
                        p class="empty" { "No upcoming tours at the moment." }
                        a class="btn" href="/tours" { "View All Tours" }
                    } @else {
                        div class="tour-grid" {
                            @for tour in tours {
                                (tour_card(tour))
                            }
                        }
                        a class="btn" href="/tours" { "Browse All Tours" }
                    }
                }))
            }
        },
    )
}

fn home_search_form() -> Markup {
    html! {
        form class="home-search" action="/search" method="POST" {
            label for="departure" { "Departure City" }
            (select("departure", std::iter::once(ALL).chain(options::DEPARTURE_CITIES.iter().copied()), ALL))
            label for="destination" { "Destination" }
            (select("destination", std::iter::once(ALL).chain(options::DESTINATIONS.iter().copied()), ALL))
            input class="btn" type="submit" value="Search Tours";
        }
    }
}

fn tour_card(tour: &Tour) -> Markup {
    html! {
        article class="tour-card" {
            img src=(tour.first_image_url().unwrap_or(CARD_IMAGE_URL)) alt=(tour.title);
            span class=(format!("badge {}", tour.status)) { (tour.status) }
            span class="price" { (format::rupees(tour.price_per_person)) }
            h3 { (tour.title) }
            ul class="facts" {
                li { (tour.departure_city) " → " (tour.destination) }
                li { (format::date(tour.start_date)) " • " (tour.duration_days) " Days" }
                li { (tour.seats_available) " seats available" }
            }
            a class="btn" href=(format!("/tours/{}", tour.id)) { "View Details" }
        }
    }
}

pub fn tours(email: Option<&str>, criteria: &TourCriteria, state: &QueryState<Vec<Tour>>) -> Markup {
    page(
        "Tours",
        email,
        None,
        html! {
            h1 { "Explore Tours" }
            p { "Find the perfect group tour for your next adventure" }
            (filter_form(criteria))
            (loaded(state, |tours| {
                let tours = filter_tours(tours, criteria);
                html! {
                    @if tours.is_empty() {
                        div class="empty" {
                            p { "No tours found matching your criteria." }
                            p { "Try adjusting your filters." }
                        }
                    } @else {
                        p class="count" {
                            "Showing " (tours.len()) " tour" @if tours.len() != 1 { "s" }
                        }
                        div class="tour-grid" {
                            @for tour in tours {
                                (tour_card(tour))
                            }
                        }
                    }
                }
            }))
        },
    )
}

fn filter_form(criteria: &TourCriteria) -> Markup {
    let with_all = |values: &'static [&'static str]| std::iter::once(ALL).chain(values.iter().copied());
    html! {
        form class="tour-filters" action="/tours" method="GET" {
            label for="search" { "Search" }
            input type="text" id="search" name="search" value=(criteria.search) placeholder="Search tours...";
            label for="departure" { "Departure City" }
            (select("departure", with_all(options::DEPARTURE_CITIES), &criteria.departure_city.to_string()))
            label for="destination" { "Destination" }
            (select("destination", with_all(options::DESTINATIONS), &criteria.destination.to_string()))
            label for="type" { "Tour Type" }
            (select("type", with_all(options::TOUR_TYPES), &criteria.tour_type.to_string()))
            label for="month" { "Month" }
            (select("month", std::iter::once(ALL.to_owned()).chain(options::month_names()), &criteria.month.to_string()))
            input class="btn" type="submit" value="Apply";
        }
    }
}

pub fn tour(
    email: Option<&str>,
    flash: Option<FlashMessage>,
    state: &QueryState<Option<Tour>>,
    draft: &EnquiryDraft,
    country_code: &str,
) -> Markup {
    let title = match state {
        QueryState::Data(Some(tour)) => tour.title.as_str(),
        QueryState::Data(None) => "Tour Not Found",
        _ => "Tour",
    };
    page(
        title,
        email,
        flash,
        html! {
            @if let Some(error) = draft.error {
                div class="flash error" { (error) }
            }
            (loaded(state, |tour| match tour {
                Some(tour) => tour_details(tour, draft, country_code),
                None => tour_not_found(),
            }))
        },
    )
}

fn tour_not_found() -> Markup {
    html! {
        section class="not-found" {
            h1 { "Tour Not Found" }
            p { "The tour you're looking for doesn't exist or has been removed." }
            a href="/tours" { "Back to Tours" }
        }
    }
}

fn tour_details(tour: &Tour, draft: &EnquiryDraft, country_code: &str) -> Markup {
    let itinerary = sorted_itinerary(&tour.itinerary);
    html! {
        section class="tour-hero" {
            img src=(tour.first_image_url().unwrap_or(HERO_IMAGE_URL)) alt=(tour.title);
            span class=(format!("badge {}", tour.status)) { (tour.status) }
            h1 { (tour.title) }
            p { (tour.departure_city) " → " (tour.destination) " • " (tour.duration_days) " Days" }
        }
        div class="tour-details" {
            div class="content" {
                section {
                    h2 { "Tour Overview" }
                    p {
                        @match &tour.description {
                            Some(description) => { (description) }
                            None => { "Experience an unforgettable journey with our carefully crafted tour package." }
                        }
                    }
                    dl {
                        dt { "Dates" }
                        dd { (format::date_range(tour.start_date, tour.end_date)) }
                        dt { "Availability" }
                        dd { (tour.seats_available) " / " (tour.seats_total) " seats" }
                    }
                }
                @if let Some(operator) = &tour.operator {
                    section class="operator" {
                        h2 { "Tour Operator" }
                        p class="name" { (operator.name) }
                        p { (operator.city) }
                        @if operator.verified {
                            span class="badge verified" { "Verified" }
                        }
                    }
                }
                @if !itinerary.is_empty() {
                    section class="itinerary" {
                        h2 { "Day-wise Itinerary" }
                        ol {
                            @for day in itinerary {
                                li {
                                    details {
                                        summary {
                                            span class="day" { (day.day_number) }
                                            (day.title)
                                        }
                                        p {
                                            @match &day.description {
                                                Some(description) => { (description) }
                                                None => { "Details will be shared closer to the departure date." }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            aside {
                p { "Price per person" }
                p class="price" { (format::rupees(tour.price_per_person)) }
                @if let Some(operator) = &tour.operator {
                    a class="btn whatsapp" target="_blank" rel="noopener noreferrer"
                        href=(whatsapp::chat_link(country_code, &operator.phone, &whatsapp::tour_enquiry_text(&tour.title))) {
                        "WhatsApp Enquiry"
                    }
                }
                h3 { "Quick Enquiry" }
                (enquiry_form(tour, draft))
            }
        }
    }
}

fn enquiry_form(tour: &Tour, draft: &EnquiryDraft) -> Markup {
    html! {
        form class="enquiry" action=(format!("/tours/{}/enquiries", tour.id)) method="POST" {
            label for="name" { "Your Name *" }
            input type="text" id="name" name="name" value=(draft.name) placeholder="Enter your name";
            label for="phone" { "Phone Number *" }
            input type="tel" id="phone" name="phone" value=(draft.phone) placeholder="Enter phone number";
            label for="message" { "Message (Optional)" }
            textarea id="message" name="message" rows="3" placeholder="Any specific questions about this tour?" {
                (draft.message)
            }
            input class="btn" type="submit" value="Submit Enquiry";
        }
    }
}
