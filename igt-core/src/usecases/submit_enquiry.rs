use super::prelude::*;

/// Store the enquiry of a visitor.
///
/// Nothing is sent to the backend if the name or phone number is missing.
pub async fn submit_enquiry<R>(repo: &R, enquiry: EnquiryFields) -> Result<()>
where
    R: EnquiryRepo + ?Sized,
{
    let enquiry = enquiry.auto_correct();
    enquiry.validate()?;
    let tour_id = enquiry.tour_id.clone();
    repo.create_enquiry(enquiry).await?;
    log::info!("New enquiry for tour {tour_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn enquiry(name: &str, phone: &str, message: &str) -> EnquiryFields {
        EnquiryFields {
            tour_id: "t1".into(),
            name: name.into(),
            phone: phone.into(),
            message: Some(message.into()),
        }
    }

    #[tokio::test]
    async fn submit_with_empty_message() {
        let db = MockDb::default();
        submit_enquiry(&db, enquiry("Asha", "9876543210", ""))
            .await
            .unwrap();
        let stored = db.enquiries.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Asha");
        assert_eq!(stored[0].message, None);
        assert_eq!(stored[0].status, EnquiryStatus::New);
    }

    #[tokio::test]
    async fn missing_name_issues_no_backend_call() {
        let db = MockDb::default();
        let err = submit_enquiry(&db, enquiry("", "9876543210", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingFields(_)));
        assert_eq!(db.calls(), 0);
    }
}
