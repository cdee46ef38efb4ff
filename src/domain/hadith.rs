//! Hadith collections and paged hadith listings.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Largest page size a listing accepts.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// A book of hadith, e.g. Sahih al-Bukhari.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HadithCollection {
    /// Short slug (`bukhari`, `muslim`, ...).
    pub id: String,
    pub name: String,
    pub total: u32,
    pub available: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hadith {
    pub number: u32,
    /// Arabic text.
    pub arab: String,
    pub id: String,
}

/// One page of a collection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HadithPage {
    pub hadiths: Vec<Hadith>,
    pub total: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Validated paging window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::InvalidPaging {
                reason: "page starts at 1".to_string(),
            });
        }
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(DomainError::InvalidPaging {
                reason: format!("limit must be between 1 and {MAX_PAGE_LIMIT}"),
            });
        }
        Ok(Self { page, limit })
    }

    /// Number of the first entry on this page (1-based).
    ///
    /// # Errors
    ///
    /// Fails when the offset does not fit in a `u32`.
    pub fn first_number(self) -> Result<u32, DomainError> {
        (self.page - 1)
            .checked_mul(self.limit)
            .and_then(|offset| offset.checked_add(1))
            .ok_or_else(|| DomainError::InvalidPaging {
                reason: format!("page {} is out of range", self.page),
            })
    }

    /// Pages needed to list `total` entries.
    #[must_use]
    pub fn page_count(self, total: u32) -> u32 {
        total.div_ceil(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_rejects_zero_page_and_bad_limits() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_LIMIT + 1).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_LIMIT).is_ok());
    }

    #[test]
    fn huge_page_offset_is_rejected_instead_of_wrapping() {
        let request = PageRequest::new(50_000_000, MAX_PAGE_LIMIT).expect("valid paging");
        assert!(matches!(
            request.first_number(),
            Err(DomainError::InvalidPaging { .. })
        ));
        let last = PageRequest::new(u32::MAX, 1).expect("valid paging");
        assert_eq!(last.first_number(), Ok(u32::MAX));
    }

    #[test]
    fn first_number_follows_page_offset() {
        assert_eq!(PageRequest::new(1, 10).and_then(PageRequest::first_number), Ok(1));
        assert_eq!(PageRequest::new(3, 10).and_then(PageRequest::first_number), Ok(21));
    }

    #[test]
    fn page_count_rounds_up() {
        let request = PageRequest::new(1, 10).expect("valid paging");
        assert_eq!(request.page_count(7563), 757);
        assert_eq!(request.page_count(100), 10);
        assert_eq!(request.page_count(0), 0);
    }
}
