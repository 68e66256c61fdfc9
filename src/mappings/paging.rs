use crate::models::{Paging, PagingInput};

/// Shallow merge: each field the caller set replaces the base value.
///
/// A page size of 0 keeps the base size, since Bugzilla reads `limit=0` as
/// "no limit".
pub fn merge_paging(base: Paging, overrides: &PagingInput) -> Paging {
    Paging {
        page_size: overrides.page_size.filter(|size| *size > 0).unwrap_or(base.page_size),
        page: overrides.page.unwrap_or(base.page),
    }
}

/// Defaults of `{ pageSize: 100, page: 0 }` with the caller's values on top.
pub fn effective_paging(paging: Option<&PagingInput>) -> Paging {
    merge_paging(Paging::default(), &paging.copied().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_paging() {
        assert_eq!(effective_paging(None), Paging { page_size: 100, page: 0 });
        assert_eq!(
            effective_paging(Some(&PagingInput::default())),
            Paging { page_size: 100, page: 0 }
        );
        assert_eq!(
            effective_paging(Some(&PagingInput { page_size: None, page: Some(2) })),
            Paging { page_size: 100, page: 2 }
        );
        assert_eq!(
            effective_paging(Some(&PagingInput { page_size: Some(10), page: Some(2) })),
            Paging { page_size: 10, page: 2 }
        );
    }

    #[test]
    fn test_zero_page_size_keeps_default() {
        assert_eq!(
            effective_paging(Some(&PagingInput { page_size: Some(0), page: Some(3) })),
            Paging { page_size: 100, page: 3 }
        );
        assert_eq!(
            merge_paging(Paging { page_size: 25, page: 0 }, &PagingInput { page_size: Some(0), page: None }).limit(),
            25
        );
    }

    #[test]
    fn test_offset() {
        let paging = merge_paging(Paging::default(), &PagingInput { page_size: Some(25), page: Some(3) });
        assert_eq!(paging.limit(), 25);
        assert_eq!(paging.offset(), 75);
    }
}
