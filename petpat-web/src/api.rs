//! Calls to the site's HTTP endpoints: dog image listing and feedback.
use petpat_core::images::IMAGE_LIST_ENDPOINT;
use petpat_core::{FeedbackSubmission, ImageList, filter_image_names, image_url};
use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use thiserror::Error;

pub const FEEDBACK_ENDPOINT: &str = "/api/feedback";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
}

/// Choose a random background image from a listing.
#[must_use]
pub fn pick_background<R: Rng>(images: &[String], rng: &mut R) -> Option<String> {
    images.choose(rng).map(|name| crate::paths::api_path(&image_url(name)))
}

/// Generator seeded from the wall clock so each visit shows a different dog.
#[must_use]
pub fn background_rng() -> SmallRng {
    use rand::SeedableRng;
    #[cfg(target_arch = "wasm32")]
    let seed = js_sys::Date::now().to_bits();
    #[cfg(not(target_arch = "wasm32"))]
    let seed = 0x5eed_u64;
    SmallRng::seed_from_u64(seed)
}

/// Encode a validated submission as the POST body.
///
/// # Errors
/// Returns [`FetchError::Encode`] if serialization fails.
pub fn feedback_body(submission: &FeedbackSubmission) -> Result<String, FetchError> {
    serde_json::to_string(submission).map_err(|err| FetchError::Encode(err.to_string()))
}

/// Fetch the available background image names; non-image entries are dropped.
///
/// # Errors
/// Returns an error when the request fails, the server answers with an error
/// status, or the body is not an image listing.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
pub async fn fetch_image_list() -> Result<Vec<String>, FetchError> {
    let url = crate::paths::api_path(IMAGE_LIST_ENDPOINT);
    let network = |err: &wasm_bindgen::JsValue| FetchError::Network {
        url: url.clone(),
        message: crate::dom::js_error_message(err),
    };
    let response = crate::dom::fetch_response(&url)
        .await
        .map_err(|err| network(&err))?;
    if !response.ok() {
        return Err(FetchError::Status {
            url: url.clone(),
            status: response.status(),
        });
    }
    let json = crate::dom::response_json(&response)
        .await
        .map_err(|err| network(&err))?;
    let list: ImageList =
        serde_wasm_bindgen::from_value(json).map_err(|err| FetchError::Decode {
            url: url.clone(),
            message: err.to_string(),
        })?;
    Ok(filter_image_names(list.images))
}

/// Send feedback to the backend.
///
/// # Errors
/// Returns an error if the request cannot be sent or is answered with a non-2xx status.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
pub async fn submit_feedback(submission: &FeedbackSubmission) -> Result<(), FetchError> {
    let url = crate::paths::api_path(FEEDBACK_ENDPOINT);
    let body = feedback_body(submission)?;
    let response = crate::dom::post_json(&url, &body)
        .await
        .map_err(|err| FetchError::Network {
            url: url.clone(),
            message: crate::dom::js_error_message(&err),
        })?;
    if response.ok() {
        Ok(())
    } else {
        Err(FetchError::Status {
            url,
            status: response.status(),
        })
    }
}

/// Parse a listing body outside the browser, used by tests and tooling.
///
/// # Errors
/// Returns [`FetchError::Decode`] when the JSON is malformed.
pub fn parse_image_list(json: &str) -> Result<Vec<String>, FetchError> {
    let list: ImageList = serde_json::from_str(json).map_err(|err| FetchError::Decode {
        url: IMAGE_LIST_ENDPOINT.to_string(),
        message: err.to_string(),
    })?;
    Ok(filter_image_names(list.images))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn background_comes_from_listing() {
        let images = vec!["beagle.jpg".to_string(), "corgi pup.png".to_string()];
        let mut rng = SmallRng::seed_from_u64(7);
        let pick = pick_background(&images, &mut rng).unwrap();
        assert!(pick.starts_with("/api/dog-image?name="));
        assert!(pick.ends_with("beagle.jpg") || pick.ends_with("corgi%20pup.png"));
        assert_eq!(pick_background(&[], &mut rng), None);
    }

    #[test]
    fn listing_is_filtered_and_sorted() {
        let images = parse_image_list(r#"{"images":["z.gif","notes.txt","A.JPG"]}"#).unwrap();
        assert_eq!(images, vec!["A.JPG".to_string(), "z.gif".to_string()]);
        assert_eq!(parse_image_list("{}").unwrap(), Vec::<String>::new());
        assert!(matches!(
            parse_image_list("nope"),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn feedback_body_uses_trimmed_fields() {
        let form = petpat_core::FeedbackForm {
            name: " Ana ".into(),
            email: "ana@example.com".into(),
            summary: "Food seems high".into(),
            message: "Check the giant table".into(),
        };
        let body = feedback_body(&form.validate().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["summary"], "Food seems high");
    }
}
