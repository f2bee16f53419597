//! Document translation
//!
//! 上传后异步翻译，用`get_document_status`轮询，状态为`available`后再用
//! `get_translated_document`下载结果。

use super::types_rs::*;
use super::utils::{into_bytes_response, into_empty_response, into_json_response};
use super::{Client, Error, FileParam, HeadersExt};
use bon::Builder;
use bytes::Bytes;
use lt_sdk_common::helper::into_header_map;
use lt_sdk_common::params::{ParamValue, Params};
use lt_sdk_common::request::{APPLICATION_JSON, BodyStyle, FormField, HttpMethod, Operation};
use reqwest::header::{ACCEPT, HeaderMap};

pub(crate) const TRANSLATE_DOCUMENT: Operation = Operation {
    name: "translateDocument",
    method: HttpMethod::Post,
    path: "/v3/documents",
    required: &["file"],
    path_params: &[],
    query_params: &[],
    body: BodyStyle::Multipart(&[
        // file使用文件自身的content type
        FormField {
            name: "file",
            content_type: None,
        },
        FormField {
            name: "model_id",
            content_type: None,
        },
        FormField {
            name: "source",
            content_type: None,
        },
        FormField {
            name: "target",
            content_type: None,
        },
        FormField {
            name: "document_id",
            content_type: None,
        },
    ]),
    accept: Some(APPLICATION_JSON),
};

pub(crate) const LIST_DOCUMENTS: Operation = Operation {
    name: "listDocuments",
    method: HttpMethod::Get,
    path: "/v3/documents",
    required: &[],
    path_params: &[],
    query_params: &[],
    body: BodyStyle::None,
    accept: Some(APPLICATION_JSON),
};

pub(crate) const GET_DOCUMENT_STATUS: Operation = Operation {
    name: "getDocumentStatus",
    method: HttpMethod::Get,
    path: "/v3/documents/{document_id}",
    required: &["document_id"],
    path_params: &["document_id"],
    query_params: &[],
    body: BodyStyle::None,
    accept: Some(APPLICATION_JSON),
};

pub(crate) const DELETE_DOCUMENT: Operation = Operation {
    name: "deleteDocument",
    method: HttpMethod::Delete,
    path: "/v3/documents/{document_id}",
    required: &["document_id"],
    path_params: &["document_id"],
    query_params: &[],
    body: BodyStyle::None,
    accept: None,
};

pub(crate) const GET_TRANSLATED_DOCUMENT: Operation = Operation {
    name: "getTranslatedDocument",
    method: HttpMethod::Get,
    path: "/v3/documents/{document_id}/translated_document",
    required: &["document_id"],
    path_params: &["document_id"],
    query_params: &[],
    body: BodyStyle::None,
    accept: None,
};

impl Client {
    pub fn translate_document(&self) -> TranslateDocumentBuilder<'_> {
        TranslateDocument::builder(self)
    }

    pub fn list_documents(&self) -> ListDocumentsBuilder<'_> {
        ListDocuments::builder(self)
    }

    pub fn get_document_status(&self) -> GetDocumentStatusBuilder<'_> {
        GetDocumentStatus::builder(self)
    }

    pub fn delete_document(&self) -> DeleteDocumentBuilder<'_> {
        DeleteDocument::builder(self)
    }

    pub fn get_translated_document(&self) -> GetTranslatedDocumentBuilder<'_> {
        GetTranslatedDocument::builder(self)
    }
}

// region    --- translate document
#[derive(Builder)]
#[builder(on(String, into))]
pub struct TranslateDocument<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    /// filename和content type从`FileParam`中取
    file: FileParam,
    model_id: Option<String>,
    source: Option<String>,
    target: Option<String>,
    /// Id of a previously submitted document to translate again.
    document_id: Option<String>,
}

impl<S: translate_document_builder::State> HeadersExt for TranslateDocumentBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for TranslateDocument<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "file" => Some(ParamValue::File(&self.file)),
            "model_id" => self.model_id.as_deref().map(ParamValue::Str),
            "source" => self.source.as_deref().map(ParamValue::Str),
            "target" => self.target.as_deref().map(ParamValue::Str),
            "document_id" => self.document_id.as_deref().map(ParamValue::Str),
            _ => None,
        }
    }
}

impl TranslateDocument<'_> {
    pub async fn send(&self) -> Result<DocumentStatus, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<DocumentStatus>, Error> {
        let resp = self
            .client
            .execute(&TRANSLATE_DOCUMENT, self, &self.headers)
            .await?;
        into_json_response(resp)
    }
}
// endregion --- translate document

// region    --- list documents
#[derive(Builder)]
pub struct ListDocuments<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
}

impl<S: list_documents_builder::State> HeadersExt for ListDocumentsBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for ListDocuments<'_> {
    fn param(&self, _name: &str) -> Option<ParamValue<'_>> {
        None
    }
}

impl ListDocuments<'_> {
    pub async fn send(&self) -> Result<DocumentList, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<DocumentList>, Error> {
        let resp = self
            .client
            .execute(&LIST_DOCUMENTS, self, &self.headers)
            .await?;
        into_json_response(resp)
    }
}
// endregion --- list documents

// region    --- document by id
#[derive(Builder)]
#[builder(on(String, into))]
pub struct GetDocumentStatus<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    document_id: String,
}

impl<S: get_document_status_builder::State> HeadersExt for GetDocumentStatusBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for GetDocumentStatus<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "document_id" => Some(ParamValue::Str(&self.document_id)),
            _ => None,
        }
    }
}

impl GetDocumentStatus<'_> {
    pub async fn send(&self) -> Result<DocumentStatus, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<DocumentStatus>, Error> {
        let resp = self
            .client
            .execute(&GET_DOCUMENT_STATUS, self, &self.headers)
            .await?;
        into_json_response(resp)
    }
}

#[derive(Builder)]
#[builder(on(String, into))]
pub struct DeleteDocument<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    document_id: String,
}

impl<S: delete_document_builder::State> HeadersExt for DeleteDocumentBuilder<'_, S> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for DeleteDocument<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "document_id" => Some(ParamValue::Str(&self.document_id)),
            _ => None,
        }
    }
}

impl DeleteDocument<'_> {
    pub async fn send(&self) -> Result<(), Error> {
        self.send_with_response().await?;
        Ok(())
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<()>, Error> {
        let resp = self
            .client
            .execute(&DELETE_DOCUMENT, self, &self.headers)
            .await?;
        Ok(into_empty_response(resp))
    }
}

#[derive(Builder)]
#[builder(on(String, into))]
pub struct GetTranslatedDocument<'a> {
    #[builder(start_fn)]
    client: &'a Client,
    #[builder(field)]
    headers: HeaderMap,
    document_id: String,
    /// Desired format of the translated file, e.g.
    /// `application/vnd.openxmlformats-officedocument.wordprocessingml.document`.
    /// Headers set through [`HeadersExt`] take precedence.
    accept: Option<String>,
}

impl<S: get_translated_document_builder::State> HeadersExt
    for GetTranslatedDocumentBuilder<'_, S>
{
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl Params for GetTranslatedDocument<'_> {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        match name {
            "document_id" => Some(ParamValue::Str(&self.document_id)),
            _ => None,
        }
    }
}

impl GetTranslatedDocument<'_> {
    pub async fn send(&self) -> Result<Bytes, Error> {
        Ok(self.send_with_response().await?.result)
    }

    pub async fn send_with_response(&self) -> Result<DetailedResponse<Bytes>, Error> {
        let mut headers = self.headers.clone();
        if let Some(accept) = &self.accept {
            if !headers.contains_key(ACCEPT) {
                let accept = into_header_map([(ACCEPT.as_str(), accept.as_str())])
                    .map_err(Error::Request)?;
                headers.extend(accept);
            }
        }
        let resp = self
            .client
            .execute(&GET_TRANSLATED_DOCUMENT, self, &headers)
            .await?;
        Ok(into_bytes_response(resp))
    }
}
// endregion --- document by id
