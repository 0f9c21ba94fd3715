use std::{fmt::Display, ops::Deref};

use serde::Serialize;

use super::{RequestError, StdResult};

/// The login of the user whose starred repositories are fetched.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Hash)]
pub struct Username(pub String);

impl Username {
    /// Creates a new `Username` instance.
    pub fn new(username: &str) -> Self {
        Self(username.to_string())
    }
}

impl Deref for Username {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request for one page of the starred repositories of a user
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Hash)]
pub struct PageRequest {
    /// The user whose stars are listed.
    pub(crate) username: Username,

    /// The page index, starting at 1.
    pub(crate) page: u32,

    /// The number of repositories per page.
    pub(crate) per_page: u16,
}

impl PageRequest {
    /// Creates a new `PageRequest`, checking that the page index and size are valid.
    pub fn try_new(username: &Username, page: u32, per_page: u16) -> StdResult<Self> {
        if page < 1 {
            return Err(RequestError::InvalidPage(page).into());
        }
        if per_page == 0 {
            return Err(RequestError::InvalidPerPage.into());
        }

        Ok(Self {
            username: username.to_owned(),
            page,
            per_page,
        })
    }

    /// Retrieves the username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Retrieves the page index.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Retrieves the page size.
    pub fn per_page(&self) -> u16 {
        self.per_page
    }

    /// Creates a dummy `PageRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(page: u32) -> Self {
        Self {
            username: Username::new("alice"),
            page,
            per_page: 30,
        }
    }
}

impl Display for PageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PageRequest: username={}, page={}, per_page={}",
            self.username, self.page, self.per_page
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_page_zero() {
        let error = PageRequest::try_new(&Username::new("alice"), 0, 30)
            .expect_err("Page 0 should be rejected");

        assert_eq!(
            Some(&RequestError::InvalidPage(0)),
            error.downcast_ref::<RequestError>()
        );
    }

    #[test]
    fn try_new_rejects_empty_page_size() {
        let error = PageRequest::try_new(&Username::new("alice"), 1, 0)
            .expect_err("Page size 0 should be rejected");

        assert_eq!(
            Some(&RequestError::InvalidPerPage),
            error.downcast_ref::<RequestError>()
        );
    }

    #[test]
    fn try_new_accepts_valid_request() {
        let request = PageRequest::try_new(&Username::new("alice"), 3, 30).unwrap();

        assert_eq!(PageRequest::dummy(3), request);
        assert_eq!(
            "PageRequest: username=alice, page=3, per_page=30",
            request.to_string()
        );
    }
}
