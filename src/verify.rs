//! The application-supplied verify callback and its closed set of call
//! shapes.

use std::future::Future;
use std::pin::Pin;

use crate::error::StrategyError;
use crate::profile::{Info, Params, Profile};
use crate::request::{AuthRequest, Credentials};

/// What the verify callback decided about the identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict<U> {
    /// The identity maps to an application user.
    Granted { user: U, info: Option<Info> },
    /// The identity is valid but the application declines it.
    Rejected { info: Option<Info> },
}

pub type VerifyResult<U> = Result<Verdict<U>, StrategyError>;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

type TokenProfileFn<U> =
    Box<dyn Fn(Credentials, Profile) -> BoxFuture<VerifyResult<U>> + Send + Sync>;
type TokenParamsProfileFn<U> =
    Box<dyn Fn(Credentials, Params, Profile) -> BoxFuture<VerifyResult<U>> + Send + Sync>;
type RequestTokenProfileFn<U> =
    Box<dyn Fn(AuthRequest, Credentials, Profile) -> BoxFuture<VerifyResult<U>> + Send + Sync>;
type RequestTokenParamsProfileFn<U> =
    Box<dyn Fn(AuthRequest, Credentials, Params, Profile) -> BoxFuture<VerifyResult<U>> + Send + Sync>;

/// The four supported verify-callback signatures.
///
/// The shape is chosen once, at construction, by picking a variant; the
/// strategy invokes exactly that shape on every attempt. The request-bearing
/// variants receive a clone of the inbound request, the params-bearing ones
/// the provider extras.
pub enum Verify<U> {
    TokenProfile(TokenProfileFn<U>),
    TokenParamsProfile(TokenParamsProfileFn<U>),
    RequestTokenProfile(RequestTokenProfileFn<U>),
    RequestTokenParamsProfile(RequestTokenParamsProfileFn<U>),
}

impl<U> Verify<U> {
    pub fn token_profile<F, Fut>(f: F) -> Self
    where
        F: Fn(Credentials, Profile) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = VerifyResult<U>> + Send + 'static,
    {
        Self::TokenProfile(Box::new(move |c, p| Box::pin(f(c, p))))
    }

    pub fn token_params_profile<F, Fut>(f: F) -> Self
    where
        F: Fn(Credentials, Params, Profile) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = VerifyResult<U>> + Send + 'static,
    {
        Self::TokenParamsProfile(Box::new(move |c, pr, p| Box::pin(f(c, pr, p))))
    }

    pub fn request_token_profile<F, Fut>(f: F) -> Self
    where
        F: Fn(AuthRequest, Credentials, Profile) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = VerifyResult<U>> + Send + 'static,
    {
        Self::RequestTokenProfile(Box::new(move |r, c, p| Box::pin(f(r, c, p))))
    }

    pub fn request_token_params_profile<F, Fut>(f: F) -> Self
    where
        F: Fn(AuthRequest, Credentials, Params, Profile) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = VerifyResult<U>> + Send + 'static,
    {
        Self::RequestTokenParamsProfile(Box::new(move |r, c, pr, p| Box::pin(f(r, c, pr, p))))
    }

    /// Invokes the configured shape with the matching positional arguments.
    pub(crate) async fn dispatch(
        &self,
        req: &AuthRequest,
        credentials: &Credentials,
        params: &Params,
        profile: Profile,
    ) -> VerifyResult<U> {
        match self {
            Self::TokenProfile(f) => f(credentials.clone(), profile).await,
            Self::TokenParamsProfile(f) => f(credentials.clone(), params.clone(), profile).await,
            Self::RequestTokenProfile(f) => f(req.clone(), credentials.clone(), profile).await,
            Self::RequestTokenParamsProfile(f) => {
                f(req.clone(), credentials.clone(), params.clone(), profile).await
            },
        }
    }
}
