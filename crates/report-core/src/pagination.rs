use crate::error::Result;

/// Largest page GitHub serves for list endpoints
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Helper function to fetch all pages of a page-numbered resource
///
/// `fetch_page` receives the 1-based page number and the page size. Fetching stops
/// at the first empty page or at a page shorter than `page_size`.
pub fn fetch_all_pages<T, F>(mut fetch_page: F, page_size: usize) -> Result<Vec<T>>
where
    F: FnMut(usize, usize) -> Result<Vec<T>>,
{
    let mut all_results = Vec::new();
    let mut page = 1;

    loop {
        let page_results = fetch_page(page, page_size)?;
        let page_len = page_results.len();

        if page_len == 0 {
            break;
        }

        all_results.extend(page_results);

        if page_len < page_size {
            break;
        }

        page += 1;
    }

    Ok(all_results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(data: &[i32], page: usize, size: usize) -> Vec<i32> {
        data.iter().copied().skip((page - 1) * size).take(size).collect()
    }

    #[test]
    fn fetch_all_pages_single_page() {
        // Arrange: only 3 items, smaller than page size
        let data = [1, 2, 3];
        // Act
        let result = fetch_all_pages(|page, size| Ok(page_of(&data, page, size)), 10).unwrap();
        // Assert
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn fetch_all_pages_multiple_pages() {
        // Arrange: 25 items with page size 10
        let data: Vec<i32> = (1..=25).collect();
        // Act
        let result = fetch_all_pages(|page, size| Ok(page_of(&data, page, size)), 10).unwrap();
        // Assert
        assert_eq!(result, data);
    }

    #[test]
    fn fetch_all_pages_exact_multiple_needs_trailing_empty_page() {
        // Arrange: 20 items, page size 10, so page 3 comes back empty
        let data: Vec<i32> = (1..=20).collect();
        let mut pages_requested = Vec::new();
        // Act
        let result = fetch_all_pages(
            |page, size| {
                pages_requested.push(page);
                Ok(page_of(&data, page, size))
            },
            10,
        )
        .unwrap();
        // Assert
        assert_eq!(result.len(), 20);
        assert_eq!(pages_requested, vec![1, 2, 3]);
    }

    #[test]
    fn fetch_all_pages_empty_first_page() {
        let result: Result<Vec<i32>> = fetch_all_pages(|_, _| Ok(vec![]), 10);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn fetch_all_pages_propagates_error() {
        // Arrange: fail on second page
        let mut call_count = 0;
        let result: Result<Vec<i32>> = fetch_all_pages(
            |_, _| {
                call_count += 1;
                if call_count == 1 {
                    Ok(vec![1, 2, 3, 4, 5])
                } else {
                    Err(crate::error::ReportError::Api {
                        status: 500,
                        message: "Server error".to_string(),
                    })
                }
            },
            5,
        );
        // Assert: error propagated
        assert!(result.is_err());
    }
}
