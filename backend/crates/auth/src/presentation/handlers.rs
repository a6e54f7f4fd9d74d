//! HTTP Handlers
//!
//! Loaders answer GET with page data or a redirect. Actions take the
//! urlencoded form, answer 400 with `ActionData` on failure and redirect
//! with a session cookie on success.

use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Redirect, Response};
use kernel::form::FieldErrors;
use kernel::id::UserId;
use kernel::validation::{validate_email, validate_name, validate_password};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentUserUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, SessionCodec,
};
use crate::domain::repository::UserRepository;
use crate::presentation::dto::{
    ActionData, CurrentUser, Fields, LoginForm, LoginPageResponse, PageQuery, RegisterForm,
    RegisterPageResponse, SessionResponse,
};
use crate::presentation::redirect::{DEFAULT_REDIRECT, href_with_query, safe_redirect_to};

pub const FORM_NOT_SUBMITTED: &str = "Form not submitted correctly.";
pub const LOGIN_FAILED: &str = "Email/Password combination is incorrect";
pub const REGISTER_FAILED: &str = "Something went wrong trying to create a new user.";

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: only the Arcs are cloned, `R` itself need not be Clone
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub fn codec(&self) -> SessionCodec {
        SessionCodec::new(self.config.clone())
    }

    pub fn current_user(&self) -> CurrentUserUseCase<R> {
        CurrentUserUseCase::new(self.repo.clone(), self.codec())
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_loader<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    if state.current_user().resolve(&headers).await.is_some() {
        return Redirect::to(DEFAULT_REDIRECT).into_response();
    }

    Json(LoginPageResponse {
        redirect_to: page_query(&uri).redirect_to,
        register_href: href_with_query("/register", uri.query()),
    })
    .into_response()
}

/// POST /login
pub async fn login_action<R>(
    State(state): State<AuthAppState<R>>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    let Ok(Form(form)) = form else {
        return action_error(ActionData::form_error(FORM_NOT_SUBMITTED));
    };
    let (Some(email), Some(password)) = (form.email, form.password) else {
        return action_error(ActionData::form_error(FORM_NOT_SUBMITTED));
    };

    let fields = Fields {
        email: email.clone(),
        ..Default::default()
    };

    let mut field_errors = FieldErrors::new();
    field_errors
        .check("email", validate_email(&email))
        .check("password", validate_password(&password));

    if !field_errors.is_empty() {
        return action_error(ActionData::invalid(field_errors, fields));
    }

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(LoginInput { email, password }).await {
        Ok(Some(user)) => {
            create_user_session(&state.codec(), &user.user_id, form.redirect_to.as_deref())
        }
        Ok(None) => action_error(ActionData::rejected(LOGIN_FAILED, fields)),
        Err(e) => {
            e.log();
            action_error(ActionData::rejected(LOGIN_FAILED, fields))
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_loader<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    if state.current_user().resolve(&headers).await.is_some() {
        return Redirect::to(DEFAULT_REDIRECT).into_response();
    }

    Json(RegisterPageResponse {
        redirect_to: page_query(&uri).redirect_to,
        login_href: href_with_query("/login", uri.query()),
    })
    .into_response()
}

/// POST /register
pub async fn register_action<R>(
    State(state): State<AuthAppState<R>>,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    let Ok(Form(form)) = form else {
        return action_error(ActionData::form_error(FORM_NOT_SUBMITTED));
    };
    let (Some(email), Some(password), Some(first_name), Some(last_name)) =
        (form.email, form.password, form.first_name, form.last_name)
    else {
        return action_error(ActionData::form_error(FORM_NOT_SUBMITTED));
    };

    let fields = Fields {
        email: email.clone(),
        first_name: Some(first_name.clone()),
        last_name: Some(last_name.clone()),
    };

    let mut field_errors = FieldErrors::new();
    field_errors
        .check("email", validate_email(&email))
        .check("password", validate_password(&password))
        .check("firstName", validate_name(&first_name))
        .check("lastName", validate_name(&last_name));

    if !field_errors.is_empty() {
        return action_error(ActionData::invalid(field_errors, fields));
    }

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());
    let input = RegisterInput {
        email,
        password,
        first_name,
        last_name,
    };

    match use_case.execute(input).await {
        Ok(Some(user)) => {
            create_user_session(&state.codec(), &user.user_id, form.redirect_to.as_deref())
        }
        Ok(None) => action_error(ActionData::rejected(REGISTER_FAILED, fields)),
        Err(e) => {
            e.log();
            action_error(ActionData::rejected(REGISTER_FAILED, fields))
        }
    }
}

// ============================================================================
// Logout / Session
// ============================================================================

/// POST /logout
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    (
        [(header::SET_COOKIE, state.codec().clear_cookie())],
        Redirect::to(DEFAULT_REDIRECT),
    )
        .into_response()
}

/// GET /session
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user = state.current_user().resolve(&headers).await;

    Json(SessionResponse {
        user: user.as_ref().map(CurrentUser::from),
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Redirect to `redirect_to` (local paths only) carrying a fresh session cookie
pub fn create_user_session(
    codec: &SessionCodec,
    user_id: &UserId,
    redirect_to: Option<&str>,
) -> Response {
    let token = codec.create_token(user_id);

    (
        [(header::SET_COOKIE, codec.session_cookie(&token))],
        Redirect::to(safe_redirect_to(redirect_to)),
    )
        .into_response()
}

fn action_error(data: ActionData) -> Response {
    (StatusCode::BAD_REQUEST, Json(data)).into_response()
}

fn page_query(uri: &Uri) -> PageQuery {
    Query::<PageQuery>::try_from_uri(uri)
        .map(|Query(query)| query)
        .unwrap_or_default()
}
