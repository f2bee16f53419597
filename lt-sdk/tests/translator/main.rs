use bytes::Bytes;
use lt_sdk::translator::*;
use lt_sdk_common::request::{Body, FormValue, HttpMethod, RequestDescriptor};
use lt_sdk_common::transport::{Response, Transport};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::json;
use std::sync::{Arc, Mutex};

const VERSION: &str = "2018-05-01";

/// Records every descriptor and answers with a canned response.
struct RecordingTransport {
    calls: Mutex<Vec<RequestDescriptor>>,
    status: StatusCode,
    body: Bytes,
}

impl RecordingTransport {
    fn new(body: serde_json::Value) -> Arc<Self> {
        Self::raw(StatusCode::OK, body.to_string())
    }

    fn raw(status: StatusCode, body: impl Into<Bytes>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            status,
            body: body.into(),
        })
    }

    fn calls(&self) -> Vec<RequestDescriptor> {
        self.calls.lock().unwrap().clone()
    }

    fn last(&self) -> RequestDescriptor {
        self.calls().pop().expect("no request recorded")
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn send_request(
        &self,
        request: RequestDescriptor,
    ) -> Result<Response, lt_sdk_common::Error> {
        self.calls.lock().unwrap().push(request);
        let mut headers = HeaderMap::new();
        headers.insert("x-global-transaction-id", HeaderValue::from_static("tx-1"));
        Ok(Response {
            status: self.status,
            headers,
            body: self.body.clone(),
        })
    }
}

struct FailingTransport;

#[async_trait::async_trait]
impl Transport for FailingTransport {
    async fn send_request(&self, _: RequestDescriptor) -> Result<Response, lt_sdk_common::Error> {
        Err(lt_sdk_common::Error::RequestAPIFailed {
            status: 404,
            message: r#"{"code":404,"error":"Model not found"}"#.to_owned(),
        })
    }
}

fn client_with(transport: Arc<dyn Transport>) -> Client {
    Client::builder()
        .version(VERSION)
        .service_url("https://example.com/language-translator/api/")
        .transport(transport)
        .build()
        .unwrap()
}

fn translation_body() -> serde_json::Value {
    json!({
        "word_count": 1,
        "character_count": 5,
        "translations": [{"translation": "hola"}]
    })
}

fn model_body(id: &str) -> serde_json::Value {
    json!({"model_id": id, "source": "en", "target": "es", "status": "available"})
}

fn version_only() -> Vec<(String, String)> {
    vec![("version".to_owned(), VERSION.to_owned())]
}

// region    --- construction
#[test]
fn blank_version_is_configuration_error() {
    let res = Client::builder()
        .version("  ")
        .transport(RecordingTransport::new(json!({})))
        .build();
    assert!(matches!(res, Err(Error::Configuration(_))));
}

#[test]
fn invalid_service_url_is_configuration_error() {
    let res = Client::builder()
        .version(VERSION)
        .service_url("not a url")
        .transport(RecordingTransport::new(json!({})))
        .build();
    assert!(matches!(res, Err(Error::Configuration(_))));
}

#[test]
fn defaults() {
    let client = Client::builder()
        .version(VERSION)
        .transport(RecordingTransport::new(json!({})))
        .build()
        .unwrap();
    assert_eq!(client.version(), VERSION);
    assert_eq!(client.service_url(), DEFAULT_SERVICE_URL);
}
// endregion --- construction

// region    --- validation
#[tokio::test]
async fn missing_required_params_never_reach_transport() {
    let rec = RecordingTransport::new(json!({}));
    let client = client_with(rec.clone());

    let err = client.translate().build().send().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation { operation: "translate", ref missing } if missing == &["text"]
    ));

    let errs = vec![
        client.identify().text("").build().send().await.err(),
        client
            .create_model()
            .base_model_id("")
            .build()
            .send()
            .await
            .err(),
        client.delete_model().model_id("").build().send().await.err(),
        client.get_model().model_id("").build().send().await.err(),
        client
            .translate_document()
            .file(FileParam::new(Bytes::new()))
            .build()
            .send()
            .await
            .err(),
        client
            .get_document_status()
            .document_id("")
            .build()
            .send()
            .await
            .err(),
        client
            .delete_document()
            .document_id("")
            .build()
            .send()
            .await
            .err(),
        client
            .get_translated_document()
            .document_id("")
            .build()
            .send()
            .await
            .err(),
    ];
    for err in errs {
        assert!(matches!(err, Some(Error::Validation { .. })), "{err:?}");
    }

    assert_eq!(rec.calls().len(), 0);
}

#[tokio::test]
async fn validation_error_names_missing_params() {
    let client = client_with(RecordingTransport::new(json!({})));
    let err = client.get_model().model_id("").build().send().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required parameters for getModel: model_id"
    );
}
// endregion --- validation

// region    --- translate / identify
#[tokio::test]
async fn translate_posts_json_without_unset_fields() {
    let rec = RecordingTransport::new(translation_body());
    let client = client_with(rec.clone());

    let res = client
        .translate()
        .text("hello")
        .source("en")
        .target("es")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(res.translations[0].translation, "hola");
    assert_eq!(res.word_count, 1);

    let req = rec.last();
    assert_eq!(req.operation, "translate");
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.path, "/v3/translate");
    assert_eq!(
        req.url,
        "https://example.com/language-translator/api/v3/translate"
    );
    assert_eq!(req.query, version_only());
    assert_eq!(
        req.body,
        Body::Json(json!({"text": ["hello"], "source": "en", "target": "es"}))
    );
    assert_eq!(req.headers[CONTENT_TYPE], "application/json");
    assert_eq!(req.headers[ACCEPT], "application/json");
}

#[tokio::test]
async fn translate_several_segments_with_model() {
    let rec = RecordingTransport::new(translation_body());
    let client = client_with(rec.clone());

    client
        .translate()
        .texts(["one", "two"])
        .text("three")
        .model_id("en-es")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(
        rec.last().body,
        Body::Json(json!({"text": ["one", "two", "three"], "model_id": "en-es"}))
    );
}

#[tokio::test]
async fn identify_sends_plain_text_and_is_deterministic() {
    let rec = RecordingTransport::new(json!({
        "languages": [{"language": "en", "confidence": 0.9}, {"language": "fr", "confidence": 0.1}]
    }));
    let client = client_with(rec.clone());

    let res = client
        .identify()
        .text("Language identification")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(res.languages[0].language, "en");
    client
        .identify()
        .text("Language identification")
        .build()
        .send()
        .await
        .unwrap();

    let calls = rec.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(calls[0].body, Body::Text("Language identification".to_owned()));
    assert_eq!(calls[0].headers[CONTENT_TYPE], "text/plain");
    assert_eq!(calls[0].path, "/v3/identify");
}
// endregion --- translate / identify

// region    --- headers
#[tokio::test]
async fn header_precedence() {
    let rec = RecordingTransport::new(translation_body());
    let mut default_headers = HeaderMap::new();
    default_headers.insert(
        "x-watson-learning-opt-out",
        HeaderValue::from_static("false"),
    );
    default_headers.insert("x-team", HeaderValue::from_static("docs"));
    let client = Client::builder()
        .version(VERSION)
        .transport(rec.clone())
        .default_headers(default_headers)
        .build()
        .unwrap();

    client
        .translate()
        .text("hello")
        .model_id("en-es")
        .header(
            HeaderName::from_static("x-watson-learning-opt-out"),
            HeaderValue::from_static("true"),
        )
        .build()
        .send()
        .await
        .unwrap();

    let headers = rec.last().headers;
    assert_eq!(headers["x-watson-learning-opt-out"], "true");
    assert_eq!(headers["x-team"], "docs");
    assert_eq!(
        headers["x-ibmcloud-sdk-analytics"],
        "service_name=language_translator;service_version=V3;operation_id=translate"
    );
    assert_eq!(
        headers[USER_AGENT],
        format!("lt-sdk/{}", env!("CARGO_PKG_VERSION")).as_str()
    );
}

#[tokio::test]
async fn custom_headers_override_diagnostics() {
    let rec = RecordingTransport::new(json!({"languages": []}));
    let client = client_with(rec.clone());

    let mut extra = HeaderMap::new();
    extra.insert(USER_AGENT, HeaderValue::from_static("my-app/1.0"));
    client
        .list_identifiable_languages()
        .headers(extra)
        .build()
        .send()
        .await
        .unwrap();

    let req = rec.last();
    assert_eq!(req.headers[USER_AGENT], "my-app/1.0");
    assert_eq!(req.path, "/v3/identifiable_languages");
    assert_eq!(req.body, Body::Empty);
    assert!(req.headers.get(CONTENT_TYPE).is_none());
}
#[tokio::test]
async fn multi_value_custom_header_is_kept() {
    let rec = RecordingTransport::new(json!({"languages": []}));
    let mut default_headers = HeaderMap::new();
    default_headers.insert("x-tag", HeaderValue::from_static("default"));
    let client = Client::builder()
        .version(VERSION)
        .transport(rec.clone())
        .default_headers(default_headers)
        .build()
        .unwrap();

    let mut extra = HeaderMap::new();
    extra.append("x-tag", HeaderValue::from_static("a"));
    extra.append("x-tag", HeaderValue::from_static("b"));
    client
        .list_languages()
        .headers(extra)
        .build()
        .send()
        .await
        .unwrap();

    let headers = rec.last().headers;
    let tags: Vec<_> = headers.get_all("x-tag").iter().collect();
    assert_eq!(tags, ["a", "b"]);
}
// endregion --- headers

// region    --- models
#[tokio::test]
async fn delete_model_substitutes_path() {
    let rec = RecordingTransport::new(json!({"status": "OK"}));
    let client = client_with(rec.clone());

    let res = client
        .delete_model()
        .model_id("abc123")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(res.status, "OK");

    let req = rec.last();
    assert_eq!(req.method, HttpMethod::Delete);
    assert_eq!(req.path, "/v3/models/abc123");
    assert_eq!(req.body, Body::Empty);
    assert_eq!(req.query, version_only());
}

#[tokio::test]
async fn get_model_escapes_id() {
    let rec = RecordingTransport::new(model_body("a/b c"));
    let client = client_with(rec.clone());

    let model = client
        .get_model()
        .model_id("a/b c")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(model.model_id, "a/b c");

    let req = rec.last();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/v3/models/a%2Fb%20c");
    assert!(!req.url.contains('{'));
}

#[tokio::test]
async fn dot_model_id_is_rejected() {
    let rec = RecordingTransport::new(json!({"status": "OK"}));
    let client = client_with(rec.clone());

    for id in [".", ".."] {
        let err = client
            .delete_model()
            .model_id(id)
            .build()
            .send()
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Request(lt_sdk_common::Error::Common(_))),
            "{err:?}"
        );
    }
    assert_eq!(rec.calls().len(), 0);
}

#[tokio::test]
async fn list_models_without_filters_sends_only_version() {
    let rec = RecordingTransport::new(json!({"models": [model_body("en-es")]}));
    let client = client_with(rec.clone());

    let res = client.list_models().build().send().await.unwrap();
    assert_eq!(res.models.len(), 1);

    let req = rec.last();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/v3/models");
    assert_eq!(req.query, version_only());
}

#[tokio::test]
async fn list_models_sends_explicit_false() {
    let rec = RecordingTransport::new(json!({"models": []}));
    let client = client_with(rec.clone());

    client
        .list_models()
        .source("en")
        .default_models(false)
        .build()
        .send()
        .await
        .unwrap();

    let req = rec.last();
    assert_eq!(req.query_value("source"), Some("en"));
    assert_eq!(req.query_value("default"), Some("false"));
    assert_eq!(req.query_value("target"), None);
}

#[tokio::test]
async fn create_model_uploads_glossary() {
    let rec = RecordingTransport::new(model_body("custom-1"));
    let client = client_with(rec.clone());

    let model = client
        .create_model()
        .base_model_id("en-es")
        .name("my model")
        .forced_glossary(
            FileParam::new(&b"<tmx/>"[..])
                .with_filename("glossary.tmx")
                .with_content_type("application/x-tmx"),
        )
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(model.model_id, "custom-1");

    let req = rec.last();
    assert_eq!(req.path, "/v3/models");
    assert_eq!(req.query_value("version"), Some(VERSION));
    assert_eq!(req.query_value("base_model_id"), Some("en-es"));
    assert_eq!(req.query_value("name"), Some("my model"));
    assert_eq!(req.headers[CONTENT_TYPE], "multipart/form-data");

    let Body::Multipart(parts) = req.body else {
        panic!("expected multipart body");
    };
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "forced_glossary");
    assert_eq!(
        parts[0].value,
        FormValue::File {
            data: Bytes::from_static(b"<tmx/>"),
            filename: "glossary.tmx".to_owned(),
            content_type: "application/octet-stream".to_owned(),
        }
    );
}
// endregion --- models

// region    --- documents
#[tokio::test]
async fn translate_document_form() {
    let rec = RecordingTransport::new(json!({
        "document_id": "doc-1",
        "filename": "a.txt",
        "status": "processing",
        "model_id": "en-es",
        "source": "en",
        "target": "es",
        "created": "2019-01-01T00:00:00Z"
    }));
    let client = client_with(rec.clone());

    let status = client
        .translate_document()
        .file(
            FileParam::new(&b"hello"[..])
                .with_filename("a.txt")
                .with_content_type("text/plain"),
        )
        .model_id("en-es")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(status.document_id, "doc-1");

    let Body::Multipart(parts) = rec.last().body else {
        panic!("expected multipart body");
    };
    assert_eq!(parts.len(), 2);
    assert_eq!(
        parts[0].value,
        FormValue::File {
            data: Bytes::from_static(b"hello"),
            filename: "a.txt".to_owned(),
            content_type: "text/plain".to_owned(),
        }
    );
    assert_eq!(parts[1].name, "model_id");
    assert_eq!(parts[1].value, FormValue::Text("en-es".to_owned()));
}

#[tokio::test]
async fn translated_document_is_returned_as_bytes() {
    let rec = RecordingTransport::raw(StatusCode::OK, "hola");
    let client = client_with(rec.clone());

    let doc = client
        .get_translated_document()
        .document_id("doc-1")
        .accept("text/plain")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(doc, Bytes::from_static(b"hola"));

    let req = rec.last();
    assert_eq!(req.path, "/v3/documents/doc-1/translated_document");
    assert_eq!(req.headers[ACCEPT], "text/plain");
}

#[tokio::test]
async fn delete_document_has_no_result() {
    let rec = RecordingTransport::raw(StatusCode::NO_CONTENT, "");
    let client = client_with(rec.clone());

    let resp = client
        .delete_document()
        .document_id("doc-1")
        .build()
        .send_with_response()
        .await
        .unwrap();
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let req = rec.last();
    assert_eq!(req.method, HttpMethod::Delete);
    assert_eq!(req.path, "/v3/documents/doc-1");
    assert!(req.headers.get(ACCEPT).is_none());
}

#[tokio::test]
async fn list_documents_is_empty() {
    let rec = RecordingTransport::new(json!({"documents": []}));
    let client = client_with(rec.clone());

    let list = client.list_documents().build().send().await.unwrap();
    assert!(list.documents.is_empty());
    let req = rec.last();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/v3/documents");
    assert_eq!(req.query, version_only());
}

#[tokio::test]
async fn get_document_status_substitutes_path() {
    let rec = RecordingTransport::new(json!({
        "document_id": "doc-1",
        "filename": "a.txt",
        "status": "available",
        "model_id": "en-es",
        "source": "en",
        "target": "es",
        "created": "2019-01-01T00:00:00Z",
        "completed": "2019-01-01T00:00:05Z",
        "word_count": 1,
        "character_count": 5
    }));
    let client = client_with(rec.clone());

    let status = client
        .get_document_status()
        .document_id("doc-1")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(status.document_id, "doc-1");
    assert_eq!(status.status, "available");
    assert_eq!(status.word_count, Some(1));
    assert_eq!(status.base_model_id, None);

    let req = rec.last();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/v3/documents/doc-1");
    assert_eq!(
        req.url,
        "https://example.com/language-translator/api/v3/documents/doc-1"
    );
    assert_eq!(req.headers[ACCEPT], "application/json");
    assert_eq!(req.body, Body::Empty);
}

#[tokio::test]
async fn invalid_accept_never_reaches_transport() {
    let rec = RecordingTransport::raw(StatusCode::OK, "hola");
    let client = client_with(rec.clone());

    let err = client
        .get_translated_document()
        .document_id("doc-1")
        .accept("text/plain\n")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Request(lt_sdk_common::Error::Common(ref m)) if m.contains("accept")
    ));
    assert_eq!(rec.calls().len(), 0);
}
// endregion --- documents

// region    --- results and errors
#[tokio::test]
async fn send_with_response_keeps_status_and_headers() {
    let rec = RecordingTransport::new(json!({"languages": [{"language": "en", "language_name": "English"}]}));
    let client = client_with(rec.clone());

    let resp = client.list_languages().build().send_with_response().await.unwrap();
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.headers["x-global-transaction-id"], "tx-1");
    assert_eq!(resp.result.languages[0].language.as_deref(), Some("en"));
    assert_eq!(rec.last().path, "/v3/languages");
}

#[tokio::test]
async fn transport_errors_pass_through() {
    let client = client_with(Arc::new(FailingTransport));
    let err = client
        .get_model()
        .model_id("missing")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(lt_sdk_common::Error::RequestAPIFailed { status: 404, .. })
    ));
}

#[tokio::test]
async fn malformed_body_is_transport_error() {
    let rec = RecordingTransport::raw(StatusCode::OK, "<html>");
    let client = client_with(rec.clone());
    let err = client.list_models().build().send().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(lt_sdk_common::Error::Common(_))
    ));
    assert_eq!(rec.calls().len(), 1);
}

#[tokio::test]
async fn concurrent_calls_share_the_client() {
    let rec = RecordingTransport::new(model_body("x"));
    let client = client_with(rec.clone());

    let a = client.get_model().model_id("a").build();
    let b = client.get_model().model_id("b").build();
    let (ra, rb) = tokio::join!(a.send(), b.send());
    assert!(ra.is_ok() && rb.is_ok());

    let mut paths: Vec<String> = rec.calls().into_iter().map(|r| r.path).collect();
    paths.sort();
    assert_eq!(paths, vec!["/v3/models/a", "/v3/models/b"]);
}
// endregion --- results and errors

// region    --- live
mod live {
    use super::*;
    use lt_sdk_common::auth::BasicAuth;
    use lt_sdk_common::transport::ReqwestTransport;
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct TranslatorConfig {
        pub api_key: String,
        pub service_url: String,
    }

    impl TranslatorConfig {
        pub fn get_conf() -> Self {
            let file_str = std::fs::read_to_string("tests/translator/config.toml").unwrap();
            toml::from_str(&file_str).unwrap()
        }
    }

    fn get_live_client() -> Client {
        let conf = TranslatorConfig::get_conf();
        let transport = ReqwestTransport::builder()
            .authenticator(Arc::new(BasicAuth::new("apikey", conf.api_key)))
            .build();
        Client::builder()
            .version(VERSION)
            .service_url(conf.service_url)
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    #[tokio::test]
    #[ignore]
    async fn translate_test() {
        let client = get_live_client();
        let res = client
            .translate()
            .text("test first line.")
            .text("test second line.")
            .model_id("en-es")
            .build()
            .send()
            .await;
        match res {
            Ok(s) => println!("[success] res:\n{:#?}", s),
            Err(e) => println!("[error] {:#?}", e),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn identify_test() {
        let client = get_live_client();
        let res = client.identify().text("Ceci est un test").build().send().await;
        match res {
            Ok(s) => println!("[success] res:\n{:#?}", s),
            Err(e) => println!("[error] {:#?}", e),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn list_models_test() {
        let client = get_live_client();
        let res = client
            .list_models()
            .source("en")
            .default_models(true)
            .build()
            .send()
            .await;
        match res {
            Ok(s) => println!("[success] res:\n{:#?}", s),
            Err(e) => println!("[error] {:#?}", e),
        }
    }
}
// endregion --- live
