//! Contact page and submission endpoints.
//!
//! `POST <base>/contact` takes the plain form post and re-renders the page
//! with the outcome. `POST <base>/api/contact` is the same submission for the
//! fetch-based client and answers with the new status as JSON.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tursa_ui::{ContactFields, ContactForm, FormError, FormStatus, Route, Shell};
use uuid::Uuid;

use crate::error::Result;
use crate::handlers::PageQuery;
use crate::render::{ContactView, SiteView};
use crate::state::{AppState, SharedState};

/// Submitted fields plus the id of the form instance they came from.
#[derive(Debug, Default, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub form_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactInput {
    /// A missing or malformed id starts a new form instance.
    fn form_id(&self) -> Uuid {
        self.form_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
            .unwrap_or_else(Uuid::new_v4)
    }

    fn into_form(self) -> ContactForm {
        ContactForm::with_fields(ContactFields {
            name: self.name,
            email: self.email,
            message: self.message,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ContactReply {
    pub status: FormStatus,
    pub message: Option<String>,
    pub form_id: String,
}

pub async fn contact_page(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let shell = Shell::from_query(Route::Contact, query.menu.as_deref());
    let view = contact_view(&state, &shell, Uuid::new_v4(), &ContactForm::new(), None);
    Ok(Html(state.renderer.render("contact.html", view)?))
}

pub async fn contact_submit(
    State(state): State<SharedState>,
    Form(input): Form<ContactInput>,
) -> Result<(StatusCode, Html<String>)> {
    let form_id = input.form_id();
    let mut form = input.into_form();

    let (code, notice) = match state.contact.submit(&mut form, form_id).await {
        Ok(()) => (StatusCode::OK, None),
        Err(e @ FormError::Missing(_)) => (StatusCode::UNPROCESSABLE_ENTITY, Some(e.to_string())),
        Err(e @ FormError::AlreadySending) => (StatusCode::CONFLICT, Some(e.to_string())),
    };

    let view = contact_view(&state, &Shell::new(Route::Contact), form_id, &form, notice);
    Ok((code, Html(state.renderer.render("contact.html", view)?)))
}

pub async fn api_contact(
    State(state): State<SharedState>,
    Json(input): Json<ContactInput>,
) -> (StatusCode, Json<ContactReply>) {
    let form_id = input.form_id();
    let mut form = input.into_form();

    let (code, message) = match state.contact.submit(&mut form, form_id).await {
        Ok(()) if form.status() == FormStatus::Success => (StatusCode::OK, None),
        Ok(()) => (StatusCode::BAD_GATEWAY, None),
        Err(e @ FormError::Missing(_)) => (StatusCode::UNPROCESSABLE_ENTITY, Some(e.to_string())),
        Err(e @ FormError::AlreadySending) => (StatusCode::CONFLICT, Some(e.to_string())),
    };

    let reply = ContactReply {
        status: form.status(),
        message: message.or_else(|| form.status().message().map(str::to_string)),
        form_id: form_id.to_string(),
    };
    (code, Json(reply))
}

fn contact_view(
    state: &AppState,
    shell: &Shell,
    form_id: Uuid,
    form: &ContactForm,
    notice: Option<String>,
) -> ContactView {
    let fields = form.fields();
    ContactView {
        site: SiteView::new(state, shell),
        page_title: "Contact",
        action: state.base.href(Route::Contact),
        api_href: format!("{}/api/contact", state.base.as_str()),
        form_id: form_id.to_string(),
        name: fields.name.clone(),
        email: fields.email.clone(),
        message: fields.message.clone(),
        status: form.status(),
        status_message: form.status().message(),
        submit_disabled: form.submit_disabled(),
        notice,
    }
}
