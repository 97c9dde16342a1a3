use maud::{html, Markup};
use rocket::request::FlashMessage;
use strum::IntoEnumIterator;

use super::{loaded, page, select};
use igt_application::cache::QueryState;
use igt_core::{
    entities::*,
    options,
    usecases::{DashboardStats, NewTour},
    util::{format, sort::sorted_itinerary, whatsapp},
};

fn admin_page(title: &str, email: &str, flash: Option<FlashMessage>, content: Markup) -> Markup {
    page(
        title,
        Some(email),
        flash,
        html! {
            nav class="admin" {
                a href="/admin" { "Dashboard" }
                a href="/admin/tours" { "Tours" }
                a href="/admin/operators" { "Operators" }
                a href="/admin/enquiries" { "Enquiries" }
            }
            (content)
        },
    )
}

pub fn dashboard(email: &str, stats: &QueryState<DashboardStats>) -> Markup {
    admin_page(
        "Dashboard",
        email,
        None,
        html! {
            h1 { "Welcome to IND Group Tours Admin" }
            (loaded(stats, |stats| html! {
                div class="stats" {
                    div class="stat" {
                        h3 { "Total Tours" }
                        p class="value" { (stats.total_tours) }
                        p { (stats.upcoming_tours) " upcoming" }
                    }
                    div class="stat" {
                        h3 { "Active Operators" }
                        p class="value" { (stats.active_operators) }
                        p { "Verified partners" }
                    }
                    div class="stat" {
                        h3 { "New Enquiries" }
                        p class="value" { (stats.new_enquiries) }
                        p { (stats.total_enquiries) " total" }
                    }
                }
            }))
            section class="quick-actions" {
                h2 { "Quick Actions" }
                a class="btn" href="/admin/tours" { "Manage Tours" }
                a class="btn" href="/admin/operators" { "Manage Operators" }
                a class="btn" href="/admin/enquiries" { "View Enquiries" }
            }
        },
    )
}

fn delete_button(action: String) -> Markup {
    html! {
        form class="inline" action=(action) method="POST" {
            input class="btn danger" type="submit" value="Delete";
        }
    }
}

pub fn operators(
    email: &str,
    flash: Option<FlashMessage>,
    operators: &QueryState<Vec<Operator>>,
    editing: Option<&Operator>,
) -> Markup {
    admin_page(
        "Operators",
        email,
        flash,
        html! {
            h1 { "Operators" }
            p { "Manage tour operators" }
            (operator_form(editing))
            (loaded(operators, |operators| html! {
                @if operators.is_empty() {
                    p class="empty" { "No operators yet. Add your first operator to get started." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Contact" }
                                th { "City" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            @for op in operators {
                                tr {
                                    td {
                                        (op.name)
                                        @if op.verified {
                                            " " span class="badge verified" { "Verified" }
                                        }
                                    }
                                    td {
                                        @if let Some(person) = &op.contact_person {
                                            (person) br;
                                        }
                                        (op.phone)
                                    }
                                    td { (op.city) }
                                    td {
                                        form class="inline" action=(format!("/admin/operators/{}/status", op.id)) method="POST" {
                                            input type="hidden" name="status" value=(op.status.toggled());
                                            input class=(format!("badge {}", op.status)) type="submit" value=(op.status)
                                                title=(format!("Set {}", op.status.toggled()));
                                        }
                                    }
                                    td {
                                        a href=(format!("/admin/operators?edit={}", op.id)) { "Edit" }
                                        (delete_button(format!("/admin/operators/{}/delete", op.id)))
                                    }
                                }
                            }
                        }
                    }
                }
            }))
        },
    )
}

fn operator_form(editing: Option<&Operator>) -> Markup {
    let values = editing.map(Operator::fields).unwrap_or_default();
    let action = match editing {
        Some(op) => format!("/admin/operators/{}", op.id),
        None => "/admin/operators".to_owned(),
    };
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    html! {
        form class="admin-form" action=(action) method="POST" {
            h2 { @if editing.is_some() { "Edit Operator" } @else { "Add Operator" } }
            label { "Company Name *" input type="text" name="name" value=(values.name); }
            label { "Contact Person" input type="text" name="contact_person" value=(text(&values.contact_person)); }
            label { "Phone *" input type="tel" name="phone" value=(values.phone); }
            label { "Email" input type="email" name="email" value=(text(&values.email)); }
            label { "City *" input type="text" name="city" value=(values.city); }
            label { "Description" textarea name="description" { (text(&values.description)) } }
            label { "Status" (select("status", OperatorStatus::iter(), values.status.as_ref())) }
            label { input type="checkbox" name="verified" checked[values.verified]; " Verified" }
            input class="btn" type="submit" value=(if editing.is_some() { "Update" } else { "Create" });
            @if editing.is_some() {
                a href="/admin/operators" { "Cancel" }
            }
        }
    }
}

pub fn tours(
    email: &str,
    flash: Option<FlashMessage>,
    tours: &QueryState<Vec<Tour>>,
    operators: &QueryState<Vec<OperatorRef>>,
    editing: Option<&Tour>,
) -> Markup {
    admin_page(
        "Tours",
        email,
        flash,
        html! {
            h1 { "Tours" }
            p { "Manage tour packages" }
            (tour_form(editing, operators))
            @if let Some(tour) = editing {
                (itinerary_editor(tour))
                (image_editor(tour))
            }
            (loaded(tours, |tours| html! {
                @if tours.is_empty() {
                    p class="empty" { "No tours yet. Create your first tour to get started." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Tour" }
                                th { "Route" }
                                th { "Dates" }
                                th { "Price" }
                                th { "Seats" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            @for tour in tours {
                                tr {
                                    td {
                                        (tour.title)
                                        @if let Some(op) = &tour.operator {
                                            br; small { (op.name) }
                                        }
                                    }
                                    td { (tour.departure_city) " → " (tour.destination) }
                                    td { (format::date_range(tour.start_date, tour.end_date)) }
                                    td { (format::rupees(tour.price_per_person)) }
                                    td { (tour.seats_available) "/" (tour.seats_total) }
                                    td { span class=(format!("badge {}", tour.status)) { (tour.status) } }
                                    td {
                                        a href=(format!("/admin/tours?edit={}", tour.id)) { "Edit" }
                                        (delete_button(format!("/admin/tours/{}/delete", tour.id)))
                                    }
                                }
                            }
                        }
                    }
                }
            }))
        },
    )
}

fn tour_form(editing: Option<&Tour>, operators: &QueryState<Vec<OperatorRef>>) -> Markup {
    let values = editing.map(NewTour::from).unwrap_or_default();
    let action = match editing {
        Some(tour) => format!("/admin/tours/{}", tour.id),
        None => "/admin/tours".to_owned(),
    };
    html! {
        form class="admin-form" action=(action) method="POST" {
            h2 { @if editing.is_some() { "Edit Tour" } @else { "Create Tour" } }
            label { "Tour Title *" input type="text" name="title" value=(values.title); }
            label { "Operator"
                select name="operator_id" {
                    option value="" selected[values.operator_id.is_empty()] { "None" }
                    @if let QueryState::Data(operators) = operators {
                        @for op in operators {
                            option value=(op.id) selected[values.operator_id == op.id.as_str()] { (op.name) }
                        }
                    }
                }
            }
            label { "Description" textarea name="description" { (values.description) } }
            label { "Departure City *" (select("departure_city", options::DEPARTURE_CITIES, &values.departure_city)) }
            label { "Destination *" (select("destination", options::DESTINATIONS, &values.destination)) }
            label { "Tour Type *" (select("tour_type", options::TOUR_TYPES, &values.tour_type)) }
            label { "Start Date *" input type="date" name="start_date" value=(values.start_date); }
            label { "End Date *" input type="date" name="end_date" value=(values.end_date); }
            label { "Duration (Days) *" input type="number" min="1" name="duration_days" value=(values.duration_days); }
            label { "Price per Person (₹) *" input type="number" min="0" name="price_per_person" value=(values.price_per_person); }
            label { "Total Seats *" input type="number" min="0" name="seats_total" value=(values.seats_total); }
            label { "Available Seats *" input type="number" min="0" name="seats_available" value=(values.seats_available); }
            label { "Status" (select("status", TourStatus::iter(), values.status.as_ref())) }
            input class="btn" type="submit" value=(if editing.is_some() { "Update" } else { "Create" });
            @if editing.is_some() {
                a href="/admin/tours" { "Cancel" }
            }
        }
    }
}

fn itinerary_editor(tour: &Tour) -> Markup {
    let next_day = tour.itinerary.iter().map(|d| d.day_number).max().unwrap_or(0) + 1;
    html! {
        section class="itinerary-editor" {
            h2 { "Itinerary" }
            @for day in sorted_itinerary(&tour.itinerary) {
                div class="day" {
                    form class="admin-form inline" action=(format!("/admin/tours/{}/itinerary/{}", tour.id, day.id)) method="POST" {
                        input type="number" min="1" name="day_number" value=(day.day_number);
                        input type="text" name="title" value=(day.title);
                        textarea name="description" { (day.description.as_deref().unwrap_or_default()) }
                        input class="btn" type="submit" value="Save";
                    }
                    (delete_button(format!("/admin/tours/{}/itinerary/{}/delete", tour.id, day.id)))
                }
            }
            form class="admin-form inline" action=(format!("/admin/tours/{}/itinerary", tour.id)) method="POST" {
                input type="number" min="1" name="day_number" value=(next_day);
                input type="text" name="title" placeholder="Day title";
                textarea name="description" placeholder="What happens on this day?" {}
                input class="btn" type="submit" value="Add Day";
            }
        }
    }
}

fn image_editor(tour: &Tour) -> Markup {
    html! {
        section class="image-editor" {
            h2 { "Images" }
            div class="images" {
                @for image in &tour.images {
                    figure {
                        img src=(image.image_url) alt=(tour.title);
                        (delete_button(format!("/admin/tours/{}/images/{}/delete", tour.id, image.id)))
                    }
                }
            }
            form class="admin-form inline" action=(format!("/admin/tours/{}/images", tour.id)) method="POST" {
                input type="url" name="image_url" placeholder="https://...";
                input class="btn" type="submit" value="Add Image";
            }
        }
    }
}

pub fn enquiries(
    email: &str,
    flash: Option<FlashMessage>,
    enquiries: &QueryState<Vec<Enquiry>>,
    country_code: &str,
) -> Markup {
    admin_page(
        "Enquiries",
        email,
        flash,
        html! {
            h1 { "Enquiries" }
            p { "Manage customer enquiries" }
            (loaded(enquiries, |enquiries| html! {
                @if enquiries.is_empty() {
                    p class="empty" { "No enquiries yet. Enquiries will appear here when customers submit them." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Date" }
                                th { "Customer" }
                                th { "Tour" }
                                th { "Message" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            @for enquiry in enquiries {
                                tr {
                                    td { (format::timestamp(enquiry.created_at)) }
                                    td { (enquiry.name) br; (enquiry.phone) }
                                    td {
                                        @match &enquiry.tour {
                                            Some(tour) => { a href=(format!("/tours/{}", tour.id)) { (tour.title) } }
                                            None => { "-" }
                                        }
                                    }
                                    td { (enquiry.message.as_deref().unwrap_or("-")) }
                                    td {
                                        form class="inline" action=(format!("/admin/enquiries/{}/status", enquiry.id)) method="POST" {
                                            (select("status", EnquiryStatus::iter(), enquiry.status.as_ref()))
                                            input class="btn" type="submit" value="Update";
                                        }
                                    }
                                    td {
                                        a class="btn whatsapp" target="_blank" rel="noopener noreferrer"
                                            href=(whatsapp::chat_link(country_code, &enquiry.phone, &whatsapp::enquiry_reply_text(&enquiry.name))) {
                                            "WhatsApp"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }))
        },
    )
}
