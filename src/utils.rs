use crate::cli::AnalyzeArgs;
use crate::config::{resolve_api_key, Settings};
use crate::constants::IMAGE_MIME;
use crate::error::AnalyzeError;
use crate::vision::{
    ApiErrorBody, ImageUrl, OpenAiVisionRequestBody, VisionContent, VisionMessageRole,
    VisionResult,
};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use std::{
    fs,
    future::Future,
    io::{self, Read},
    path::Path,
};

pub fn build_headers(api_key: &str) -> Result<HeaderMap, AnalyzeError> {
    let mut headers = HeaderMap::new();
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(AnalyzeError::InvalidApiKey)?;
    bearer.set_sensitive(true);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn build_client(settings: &Settings) -> Result<Client, AnalyzeError> {
    Ok(Client::builder().timeout(settings.timeout).build()?)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Reads the whole file and returns it as standard padded base64.
/// No size limit is applied.
pub fn encode_image(image_path: &Path) -> Result<String, AnalyzeError> {
    let io_error = |source: io::Error| AnalyzeError::Io {
        path: image_path.to_path_buf(),
        source,
    };
    let mut file = fs::File::open(image_path).map_err(io_error)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).map_err(io_error)?;
    log::debug!("read {} bytes from {}", buffer.len(), image_path.display());
    Ok(base64::encode(buffer))
}

pub fn image_data_url(image_base64: &str) -> String {
    format!("data:{};base64,{}", IMAGE_MIME, image_base64)
}

pub fn build_vision_request(
    settings: &Settings,
    prompt: &str,
    image_base64: &str,
) -> OpenAiVisionRequestBody {
    OpenAiVisionRequestBody {
        model: settings.model.clone(),
        messages: vec![VisionMessageRole {
            role: "user".to_string(),
            content: vec![
                VisionContent::Text {
                    text: prompt.to_string(),
                },
                VisionContent::ImageUrl {
                    image_url: ImageUrl {
                        url: image_data_url(image_base64),
                    },
                },
            ],
        }],
        max_tokens: settings.max_tokens,
    }
}

pub fn process_vision_response(
    status: StatusCode,
    body: &str,
) -> Result<VisionResult, AnalyzeError> {
    if status != StatusCode::OK {
        return Err(AnalyzeError::Api {
            status,
            body: ApiErrorBody::parse(body.to_string()),
        });
    }
    let value = serde_json::from_str(body).map_err(AnalyzeError::ResponseParse)?;
    Ok(VisionResult::from_value(value))
}

pub async fn send_vision_request(
    client: &Client,
    settings: &Settings,
    headers: HeaderMap,
    request_body: &OpenAiVisionRequestBody,
) -> Result<VisionResult, AnalyzeError> {
    let payload = serde_json::to_vec(request_body).map_err(AnalyzeError::Serialization)?;
    log::debug!(
        "posting {} byte request to {} (model {})",
        payload.len(),
        settings.api_url,
        settings.model
    );

    let spinner = create_spinner("magenta", "Processing request...".to_string());
    let received = async {
        let response = client
            .post(&settings.api_url)
            .headers(headers)
            .body(payload)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok::<_, reqwest::Error>((status, body))
    }
    .await;
    spinner.finish_and_clear();

    let (status, body) = received?;
    log::debug!("received {} with {} byte body", status, body.len());
    process_vision_response(status, &body)
}

/// Runs one analysis: credential, arguments, image, request. The first
/// failing step ends the run.
pub async fn analyze(
    client: &Client,
    settings: &Settings,
    args: &AnalyzeArgs,
    fallback_key: Option<String>,
) -> Result<VisionResult, AnalyzeError> {
    let api_key = resolve_api_key(&args.api_key, fallback_key)?;
    let headers = build_headers(&api_key)?;

    if args.image.is_empty() || args.prompt.is_empty() {
        return Err(AnalyzeError::MissingArguments);
    }

    let image_base64 = encode_image(Path::new(&args.image))?;
    let request_body = build_vision_request(settings, &args.prompt, &image_base64);

    send_vision_request(client, settings, headers, &request_body).await
}

/// Races `analyze` against `cancel`. Only `Ok` from `cancel` stops the
/// run; an `Err` leaves the analysis running to completion.
pub async fn analyze_until_cancelled<C>(
    client: &Client,
    settings: &Settings,
    args: &AnalyzeArgs,
    fallback_key: Option<String>,
    cancel: C,
) -> Result<VisionResult, AnalyzeError>
where
    C: Future<Output = io::Result<()>>,
{
    tokio::select! {
        result = analyze(client, settings, args, fallback_key) => result,
        Ok(()) = cancel => {
            log::debug!("cancellation requested, abandoning request");
            Err(AnalyzeError::Cancelled)
        }
    }
}
