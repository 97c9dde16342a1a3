use rocket::{config::Config as RocketCfg, local::blocking::Client, tokio::runtime};

use igt_core::{db::Connections, entities::*, usecases};
use igt_gateways::memory::{InMemoryAuth, InMemoryBackend};

use super::{Cfg, Contact};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{
        new_tour, rocket_test_setup, sign_in, Seed, ADMIN_EMAIL, ADMIN_PASSWORD, USER_EMAIL, USER_PASSWORD,
    };
}

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "secret";
pub const USER_EMAIL: &str = "guide@example.com";
pub const USER_PASSWORD: &str = "guide";

fn test_cfg() -> Cfg {
    Cfg {
        contact: Contact {
            phone: "98765 43210".into(),
            email: "info@example.com".into(),
            whatsapp_country_code: "91".into(),
        },
    }
}

pub fn rocket_test_setup() -> (Client, Seed) {
    let _ = env_logger::builder().is_test(true).try_init();
    let db = InMemoryBackend::default();
    let auth = InMemoryAuth::with_admin(ADMIN_EMAIL, ADMIN_PASSWORD).account(
        USER_EMAIL,
        USER_PASSWORD,
        Role::User,
    );
    let options = super::InstanceOptions {
        mounts: super::mounts(),
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg: test_cfg(),
    };
    let gateways = super::Gateways {
        db: Box::new(db.clone()),
        auth: Box::new(auth),
    };
    let rocket = super::rocket_instance(options, gateways);
    let client = Client::tracked(rocket).unwrap();
    (client, Seed(db))
}

pub fn sign_in(client: &Client, email: &str, password: &str) {
    let res = client
        .post("/auth/sign-in")
        .header(rocket::http::ContentType::Form)
        .body(format!("email={email}&password={password}"))
        .dispatch();
    assert_eq!(res.status(), rocket::http::Status::SeeOther);
}

/// Writes rows directly into the backend, bypassing the server and its cache.
pub struct Seed(InMemoryBackend);

impl Seed {
    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(f)
    }

    fn admin(&self) -> std::sync::Arc<dyn igt_core::db::Backend> {
        self.0.authorized(&AccessToken::from("seed".to_string()))
    }

    pub fn operator(&self, name: &str, phone: &str) -> Operator {
        let fields = OperatorFields {
            name: name.into(),
            phone: phone.into(),
            city: "Raipur".into(),
            verified: true,
            ..Default::default()
        };
        Self::block_on(usecases::create_operator(&*self.admin(), fields)).unwrap()
    }

    pub fn tour(&self, operator: Option<&Operator>, tour: usecases::NewTour) -> Tour {
        let tour = usecases::NewTour {
            operator_id: operator.map(|op| op.id.to_string()).unwrap_or_default(),
            ..tour
        };
        Self::block_on(usecases::create_tour(&*self.admin(), tour)).unwrap()
    }

    pub fn itinerary_day(&self, tour: &Tour, day_number: u16, title: &str) {
        let day = ItineraryFields {
            tour_id: tour.id.clone(),
            day_number,
            title: title.into(),
            description: None,
        };
        Self::block_on(usecases::add_itinerary_day(&*self.admin(), day)).unwrap();
    }

    pub fn enquiries(&self) -> Vec<Enquiry> {
        use igt_core::repositories::EnquiryRepo;
        Self::block_on(self.admin().all_enquiries()).unwrap()
    }

    pub fn operators(&self) -> Vec<Operator> {
        use igt_core::repositories::OperatorRepo;
        Self::block_on(self.admin().all_operators()).unwrap()
    }

    pub fn tours(&self) -> Vec<Tour> {
        use igt_core::repositories::TourRepo;
        Self::block_on(self.admin().all_tours()).unwrap()
    }
}

pub fn new_tour(title: &str, destination: &str, start_date: &str) -> usecases::NewTour {
    usecases::NewTour {
        title: title.into(),
        departure_city: "Raipur".into(),
        destination: destination.into(),
        tour_type: "Pilgrimage".into(),
        start_date: start_date.into(),
        end_date: start_date.into(),
        duration_days: 5,
        price_per_person: 125_000,
        status: TourStatus::Upcoming,
        ..Default::default()
    }
}
