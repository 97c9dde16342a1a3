//! Descriptors of the read queries whose results are cached.

use crate::entities::Id;

/// Tables of the hosted backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Operators,
    Tours,
    TourImages,
    TourItinerary,
    Enquiries,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// Public tour list
    Tours,
    /// Tours advertised on the home page
    FeaturedTours,
    Tour(Id),
    /// Tour list of the back office
    AdminTours,
    Operators,
    /// Operator picker
    ActiveOperators,
    Enquiries,
    DashboardStats,
}

impl QueryKey {
    /// All tables the query reads from, including expanded relations.
    pub fn tables(&self) -> &'static [Table] {
        use Table as T;
        match self {
            Self::Tours | Self::Tour(_) => {
                &[T::Tours, T::Operators, T::TourImages, T::TourItinerary]
            }
            Self::FeaturedTours => &[T::Tours, T::Operators, T::TourImages],
            Self::AdminTours => &[T::Tours, T::Operators],
            Self::Operators | Self::ActiveOperators => &[T::Operators],
            Self::Enquiries => &[T::Enquiries, T::Tours],
            Self::DashboardStats => &[T::Tours, T::Operators, T::Enquiries],
        }
    }

    pub fn reads(&self, table: Table) -> bool {
        self.tables().contains(&table)
    }

    /// Query of a single record chosen by the caller.
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Tour(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_writes_affect_all_queries_that_expand_operators() {
        let affected: Vec<_> = [
            QueryKey::Tours,
            QueryKey::FeaturedTours,
            QueryKey::Tour(Id::from("t1")),
            QueryKey::AdminTours,
            QueryKey::Operators,
            QueryKey::ActiveOperators,
            QueryKey::Enquiries,
            QueryKey::DashboardStats,
        ]
        .into_iter()
        .filter(|k| k.reads(Table::Operators))
        .collect();
        assert!(!affected.contains(&QueryKey::Enquiries));
        assert_eq!(affected.len(), 7);
    }

    #[test]
    fn enquiry_writes_only_affect_enquiry_queries() {
        assert!(QueryKey::Enquiries.reads(Table::Enquiries));
        assert!(QueryKey::DashboardStats.reads(Table::Enquiries));
        assert!(!QueryKey::Tours.reads(Table::Enquiries));
        assert!(!QueryKey::Operators.reads(Table::Enquiries));
    }

    #[test]
    fn only_single_tours_are_records() {
        assert!(QueryKey::Tour("x".into()).is_record());
        assert!(!QueryKey::Tours.is_record());
        assert!(!QueryKey::DashboardStats.is_record());
    }

    #[test]
    fn itinerary_writes_do_not_affect_featured_tours() {
        assert!(QueryKey::Tour("x".into()).reads(Table::TourItinerary));
        assert!(!QueryKey::FeaturedTours.reads(Table::TourItinerary));
    }
}
