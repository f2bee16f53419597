use super::types_rs::*;
use super::utils::into_json_response;
use super::{Client, Error, FileParam, HeadersExt};
use bon::Builder;
use lt_sdk_common::params::{ParamValue, Params};
use lt_sdk_common::request::{
    APPLICATION_JSON, BodyStyle, FormField, HttpMethod, OCTET_STREAM, Operation,
};
use reqwest::header::HeaderMap;

pub(crate) const CREATE_MODEL: Operation = Operation {
    name: "createModel",
    method: HttpMethod::Post,
    path: "/v3/models",
    required: &["base_model_id"],
    path_params: &[],
    query_params: &["base_model_id", "name"],
    body: BodyStyle::Multipart(&[
        FormField {
            name: "forced_glossary",
            content_type: Some(OCTET_STREAM),
        },
        FormField {
            name: "parallel_corpus",
            content_type: Some(OCTET_STREAM),
        },
    ]),
    accept: Some(APPLICATION_JSON),
};

pub(crate) const DELETE_MODEL: Operation = Operation {
    name: "deleteModel",
    method: HttpMethod::Delete,
    path: "/v3/models/{model_id}",
    required: &["model_id"],
    path_params: &["model_id"],
    query_params: &[],
    body: BodyStyle::None,
    accept: Some(APPLICATION_JSON),
};

pub(crate) const GET_MODEL: Operation = Operation {
    name: "getModel",
    method: HttpMethod::Get,
    path: "/v3/models/{model_id}",
    required: &["model_id"],
    path_params: &["model_id"],
    query_params: &[],
    body: BodyStyle::None,
    accept: Some(APPLICATION_JSON),
};

pub(crate) const LIST_MODELS: Operation = Operation {
    name: "listModels",
    method: HttpMethod::Get,
    path: "/v3/models",
    required: &[],
    path_params: &[],
    query_params: &["source", "target", "default"],
    body: BodyStyle::None,
    accept: Some(APPLICATION_JSON),
};

impl Client {
    /// Trains a custom model on top of `base_model_id` with a forced glossary
    /// and/or a parallel corpus.
    pub fn create_model(&self) -> CreateModelBuilder<'_> {
        CreateModel::builder(self)
    }

    /// 只能删除自定义模型
    pub fn delete_model(&self) -> DeleteModelBuilder<'_> {
        DeleteModel::builder(self)
    }

    pub fn get_model(&self) -> GetModelBuilder<'_> {
        GetModel::builder(self)
    }

    pub fn list_models(&self) -> ListModelsBuilder<'_> {
        ListModels::builder(self)
    }
}

// region    --- create model
#[derive(Builder)]
#[builder(on(String, into))]
pub struct CreateModel<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    base_model_id: String,
    name: Option<String>,
    /// TMX file, entries are always translated as given.
    forced_glossary: Option<FileParam>,
    /// TMX file of sentence pairs to train on.
    parallel_corpus: Option<FileParam>,
}

impl<S: create_model_builder::State> HeadersExt for CreateModelBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for CreateModel<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "base_model_id" => Some(ParamValue::Str(&self.base_model_id)),
            "name" => self.name.as_deref().map(ParamValue::Str),
            "forced_glossary" => self.forced_glossary.as_ref().map(ParamValue::File),
            "parallel_corpus" => self.parallel_corpus.as_ref().map(ParamValue::File),
            _ => None,
        }
    }
}

impl CreateModel<'_> {
    pub async fn send(&self) -> Result<TranslationModel, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<TranslationModel>, Error> {
        let resp = self
            .client
            .execute(&CREATE_MODEL, self, &self.headers)
            .await?;
        into_json_response(resp)
    }
}
// endregion --- create model

// region    --- delete / get model
#[derive(Builder)]
#[builder(on(String, into))]
pub struct DeleteModel<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    model_id: String,
}

impl<S: delete_model_builder::State> HeadersExt for DeleteModelBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for DeleteModel<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "model_id" => Some(ParamValue::Str(&self.model_id)),
            _ => None,
        }
    }
}

impl DeleteModel<'_> {
    pub async fn send(&self) -> Result<DeleteModelResult, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<DeleteModelResult>, Error> {
        let resp = self
            .client
            .execute(&DELETE_MODEL, self, &self.headers)
            .await?;
        into_json_response(resp)
    }
}

#[derive(Builder)]
#[builder(on(String, into))]
pub struct GetModel<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    model_id: String,
}

impl<S: get_model_builder::State> HeadersExt for GetModelBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for GetModel<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "model_id" => Some(ParamValue::Str(&self.model_id)),
            _ => None,
        }
    }
}

impl GetModel<'_> {
    pub async fn send(&self) -> Result<TranslationModel, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<TranslationModel>, Error> {
        let resp = self.client.execute(&GET_MODEL, self, &self.headers).await?;
        into_json_response(resp)
    }
}
// endregion --- delete / get model

// region    --- list models
#[derive(Builder)]
#[builder(on(String, into))]
pub struct ListModels<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    source: Option<String>,
    target: Option<String>,
    /// `Some(false)` is sent as `default=false`, `None` leaves the filter off.
    default_models: Option<bool>,
}

impl<S: list_models_builder::State> HeadersExt for ListModelsBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for ListModels<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "source" => self.source.as_deref().map(ParamValue::Str),
            "target" => self.target.as_deref().map(ParamValue::Str),
            "default" => self.default_models.map(ParamValue::Bool),
            _ => None,
        }
    }
}

impl ListModels<'_> {
    pub async fn send(&self) -> Result<TranslationModels, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<TranslationModels>, Error> {
        let resp = self
            .client
            .execute(&LIST_MODELS, self, &self.headers)
            .await?;
        into_json_response(resp)
    }
}
// endregion --- list models
