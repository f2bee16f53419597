use super::types_rs::*;
use super::utils::into_json_response;
use super::{Client, Error, HeadersExt};
use bon::Builder;
use lt_sdk_common::params::{ParamValue, Params};
use lt_sdk_common::request::{APPLICATION_JSON, BodyStyle, HttpMethod, Operation};
use reqwest::header::HeaderMap;

pub(crate) const TRANSLATE: Operation = Operation {
    name: "translate",
    method: HttpMethod::Post,
    path: "/v3/translate",
    required: &["text"],
    path_params: &[],
    query_params: &[],
    body: BodyStyle::Json(&["text", "model_id", "source", "target"]),
    accept: Some(APPLICATION_JSON),
};

pub(crate) const IDENTIFY: Operation = Operation {
    name: "identify",
    method: HttpMethod::Post,
    path: "/v3/identify",
    required: &["text"],
    path_params: &[],
    query_params: &[],
    body: BodyStyle::Text("text"),
    accept: Some(APPLICATION_JSON),
};

impl Client {
    /// 翻译文本
    ///
    /// 指定`model_id`，或者同时指定`source`和`target`。省略`source`时由服务端检测语言。
    pub fn translate(&self) -> TranslateBuilder<'_> {
        Translate::builder(self)
    }

    /// Identifies the language of the input text.
    pub fn identify(&self) -> IdentifyBuilder<'_> {
        Identify::builder(self)
    }
}

// region    --- translate
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Translate<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    // #[builder(field)]需要放在start_fn之后
    #[builder(field)]
    text: Vec<String>,
    #[builder(field)]
    headers: HeaderMap,
    model_id: Option<String>,
    source: Option<String>,
    target: Option<String>,
}

impl<S: translate_builder::State> TranslateBuilder<'_, S> {
    /// One segment of input text. Can be called repeatedly.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text.push(text.into());
        self
    }

    pub fn texts<T: Into<String>>(mut self, texts: impl IntoIterator<Item = T>) -> Self {
        self.text.extend(texts.into_iter().map(Into::into));
        self
    }
}

impl<S: translate_builder::State> HeadersExt for TranslateBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for Translate<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "text" => Some(ParamValue::StrList(&self.text)),
            "model_id" => self.model_id.as_deref().map(ParamValue::Str),
            "source" => self.source.as_deref().map(ParamValue::Str),
            "target" => self.target.as_deref().map(ParamValue::Str),
            _ => None,
        }
    }
}

impl Translate<'_> {
    pub async fn send(&self) -> Result<TranslationResult, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<TranslationResult>, Error> {
        let resp = self.client.execute(&TRANSLATE, self, &self.headers).await?;
        into_json_response(resp)
    }
}
// endregion --- translate

// region    --- identify
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Identify<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    /// Sent as the raw `text/plain` body.
    text: String,
}

impl<S: identify_builder::State> HeadersExt for IdentifyBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for Identify<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "text" => Some(ParamValue::Str(&self.text)),
            _ => None,
        }
    }
}

impl Identify<'_> {
    pub async fn send(&self) -> Result<IdentifiedLanguages, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<IdentifiedLanguages>, Error> {
        let resp = self.client.execute(&IDENTIFY, self, &self.headers).await?;
        into_json_response(resp)
    }
}
// endregion --- identify
