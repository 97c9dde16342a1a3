use std::sync::Arc;

use crate::{entities::AccessToken, repositories::*};

pub trait Backend: OperatorRepo + TourRepo + TourImageRepo + TourItineraryRepo + EnquiryRepo {}

impl<T> Backend for T where
    T: OperatorRepo + TourRepo + TourImageRepo + TourItineraryRepo + EnquiryRepo
{
}

/// Hands out backend handles with the privileges of the caller.
pub trait Connections: Send + Sync {
    /// Privileges of an anonymous visitor.
    fn public(&self) -> Arc<dyn Backend>;

    /// Privileges of the signed in user the token was issued for.
    fn authorized(&self, token: &AccessToken) -> Arc<dyn Backend>;
}
