use super::types_rs::*;
use super::utils::into_json_response;
use super::{Client, Error, HeadersExt};
use bon::Builder;
use lt_sdk_common::params::{ParamValue, Params};
use lt_sdk_common::request::{APPLICATION_JSON, BodyStyle, HttpMethod, Operation};
use reqwest::header::HeaderMap;

pub(crate) const LIST_LANGUAGES: Operation = Operation {
    name: "listLanguages",
    method: HttpMethod::Get,
    path: "/v3/languages",
    required: &[],
    path_params: &[],
    query_params: &[],
    body: BodyStyle::None,
    accept: Some(APPLICATION_JSON),
};

pub(crate) const LIST_IDENTIFIABLE_LANGUAGES: Operation = Operation {
    name: "listIdentifiableLanguages",
    method: HttpMethod::Get,
    path: "/v3/identifiable_languages",
    required: &[],
    path_params: &[],
    query_params: &[],
    body: BodyStyle::None,
    accept: Some(APPLICATION_JSON),
};

impl Client {
    /// Languages supported for translation.
    pub fn list_languages(&self) -> ListLanguagesBuilder<'_> {
        ListLanguages::builder(self)
    }

    /// Languages that [`Client::identify`] can recognise.
    pub fn list_identifiable_languages(&self) -> ListIdentifiableLanguagesBuilder<'_> {
        ListIdentifiableLanguages::builder(self)
    }
}

#[derive(Builder)]
pub struct ListLanguages<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
}

impl<S: list_languages_builder::State> HeadersExt for ListLanguagesBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for ListLanguages<'_> {
    fn param(&self, _name: &str) -> Option<ParamValue<'_>> {
        None
    }
}

impl ListLanguages<'_> {
    pub async fn send(&self) -> Result<Languages, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<Languages>, Error> {
        let resp = self
            .client
            .execute(&LIST_LANGUAGES, self, &self.headers)
            .await?;
        into_json_response(resp)
    }
}

#[derive(Builder)]
pub struct ListIdentifiableLanguages<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
}

impl<S: list_identifiable_languages_builder::State> HeadersExt
    for ListIdentifiableLanguagesBuilder<'_, S>
{
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for ListIdentifiableLanguages<'_> {
    fn param(&self, _name: &str) -> Option<ParamValue<'_>> {
        None
    }
}

impl ListIdentifiableLanguages<'_> {
    pub async fn send(&self) -> Result<IdentifiableLanguages, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<IdentifiableLanguages>, Error> {
        let resp = self
            .client
            .execute(&LIST_IDENTIFIABLE_LANGUAGES, self, &self.headers)
            .await?;
        into_json_response(resp)
    }
}
