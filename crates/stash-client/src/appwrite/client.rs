//! Appwrite REST storage backend.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use stash_core::config::backend::BackendConfig;
use stash_core::error::{AppError, ErrorKind};
use stash_core::result::AppResult;
use stash_core::types::SortDirection;
use stash_entity::file::{FileQuery, FileRecord};
use stash_entity::user::User;
use stash_usage::backend::StorageBackend;

use super::models::{Account, DocumentList, ErrorBody};
use super::query::Query;

/// Documents requested per listing page when the caller sets no limit.
pub const LIST_PAGE_SIZE: u32 = 100;

/// Talks to an Appwrite project on behalf of one session.
///
/// The user profile resolved by `current_user` is cached for the session, so
/// a following `list_files` does not look it up again.
#[derive(Debug, Clone)]
pub struct AppwriteBackend {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    database_id: String,
    users_collection_id: String,
    files_collection_id: String,
    session_secret: Option<String>,
    user: Arc<Mutex<Option<User>>>,
}

impl AppwriteBackend {
    /// Create a backend from configuration.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        Url::parse(&endpoint).map_err(|e| {
            AppError::configuration(format!("Invalid backend endpoint '{endpoint}': {e}"))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Internal,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            http,
            endpoint,
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            users_collection_id: config.users_collection_id.clone(),
            files_collection_id: config.files_collection_id.clone(),
            session_secret: config.session_secret.clone().filter(|s| !s.is_empty()),
            user: Arc::default(),
        })
    }

    fn url(&self, path: &str) -> AppResult<Url> {
        Url::parse(&format!("{}{}", self.endpoint, path))
            .map_err(|e| AppError::internal(format!("Invalid request URL for '{path}': {e}")))
    }

    fn documents_url(&self, collection_id: &str, queries: &[Query]) -> AppResult<Url> {
        let mut url = self.url(&format!(
            "/databases/{}/collections/{}/documents",
            self.database_id, collection_id
        ))?;
        {
            let mut pairs = url.query_pairs_mut();
            for query in queries {
                pairs.append_pair("queries[]", &query.to_json());
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("Accept", "application/json");

        match &self.session_secret {
            Some(secret) => builder.header("X-Appwrite-Session", secret),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let response = builder.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Storage service request failed: {e}"),
                e,
            )
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        Err(error_from_response(response).await)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let response = self.send(self.request(Method::GET, url)).await?;
        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Failed to decode storage service response: {e}"),
                e,
            )
        })
    }

    /// Fetch the auth account behind the session, `None` if the session is not valid.
    async fn account(&self) -> AppResult<Option<Account>> {
        if self.session_secret.is_none() {
            tracing::debug!("No session secret configured");
            return Ok(None);
        }

        match self.get_json::<Account>(self.url("/account")?).await {
            Ok(account) => Ok(Some(account)),
            Err(e) if e.is_authentication() => {
                tracing::debug!("Account lookup rejected: {e}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn cached_user(&self) -> Option<User> {
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn cache_user(&self, user: Option<User>) {
        *self.user.lock().unwrap_or_else(PoisonError::into_inner) = user;
    }

    /// Fetch one page of file documents.
    async fn file_page(
        &self,
        user: &User,
        query: &FileQuery,
        page: Option<(u32, Option<&str>)>,
    ) -> AppResult<DocumentList<FileRecord>> {
        let mut queries = Self::file_queries(user, query);
        if let Some((size, cursor)) = page {
            queries.push(Query::limit(size));
            if let Some(id) = cursor {
                queries.push(Query::cursor_after(id));
            }
        }
        let url = self.documents_url(&self.files_collection_id, &queries)?;
        self.get_json(url).await
    }

    fn file_queries(user: &User, query: &FileQuery) -> Vec<Query> {
        let mut queries = vec![Query::or([
            Query::equal("owner", [user.id.as_str()]),
            Query::contains("users", [user.email.as_str()]),
        ])];

        if !query.types.is_empty() {
            queries.push(Query::equal(
                "type",
                query.types.iter().map(|t| t.as_str()),
            ));
        }

        let search = query.search_text.trim();
        if !search.is_empty() {
            queries.push(Query::contains("name", [search]));
        }

        if let Some(limit) = query.limit {
            queries.push(Query::limit(limit));
        }

        queries.push(match query.sort.direction {
            SortDirection::Asc => Query::order_asc(query.sort.field.clone()),
            SortDirection::Desc => Query::order_desc(query.sort.field.clone()),
        });

        queries
    }
}

#[async_trait]
impl StorageBackend for AppwriteBackend {
    async fn current_user(&self) -> AppResult<Option<User>> {
        let Some(account) = self.account().await? else {
            return Ok(None);
        };

        let url = self.documents_url(
            &self.users_collection_id,
            &[
                Query::equal("accountId", [account.id.as_str()]),
                Query::limit(1),
            ],
        )?;
        let users: DocumentList<User> = self.get_json(url).await?;

        let user = users.documents.into_iter().next();
        if user.is_none() {
            tracing::warn!(account_id = %account.id, "Session has no user profile document");
        }
        self.cache_user(user.clone());
        Ok(user)
    }

    /// Without a `limit` every matching document is fetched, page by page.
    async fn list_files(&self, query: &FileQuery) -> AppResult<Vec<FileRecord>> {
        let user = match self.cached_user() {
            Some(user) => user,
            None => self
                .current_user()
                .await?
                .ok_or_else(|| AppError::authentication("No active session"))?,
        };

        if query.limit.is_some() {
            let files = self.file_page(&user, query, None).await?;
            tracing::debug!(
                user_id = %user.id,
                returned = files.documents.len(),
                total = files.total,
                "Listed files"
            );
            return Ok(files.documents);
        }

        let mut records: Vec<FileRecord> = Vec::new();
        let mut pages = 0u32;
        loop {
            let cursor = records.last().map(|f| f.id.as_str());
            let page = self
                .file_page(&user, query, Some((LIST_PAGE_SIZE, cursor)))
                .await?;
            pages += 1;

            let fetched = page.documents.len();
            records.extend(page.documents);
            if fetched == 0 || records.len() as u64 >= page.total {
                if (records.len() as u64) < page.total {
                    tracing::warn!(
                        user_id = %user.id,
                        returned = records.len(),
                        total = page.total,
                        "File listing ended before the reported total"
                    );
                }
                break;
            }
        }

        tracing::debug!(
            user_id = %user.id,
            returned = records.len(),
            pages,
            "Listed all files"
        );

        Ok(records)
    }

    async fn delete_current_session(&self) -> AppResult<()> {
        if self.session_secret.is_none() {
            return Err(AppError::authentication("No active session"));
        }

        let url = self.url("/account/sessions/current")?;
        self.send(self.request(Method::DELETE, url)).await?;
        self.cache_user(None);
        Ok(())
    }
}

/// Map a non-2xx response into an [`AppError`], preferring the server's message.
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .filter(|b| !b.message.is_empty())
        .map(|b| {
            if b.error_type.is_empty() {
                b.message
            } else {
                format!("{} ({})", b.message, b.error_type)
            }
        })
        .unwrap_or_else(|| format!("Storage service returned {status}"));

    let kind = match status {
        StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::TOO_MANY_REQUESTS => ErrorKind::RateLimit,
        _ => ErrorKind::ExternalService,
    };

    tracing::debug!(%status, "Storage service error: {message}");
    AppError::new(kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::types::SortField;
    use stash_entity::file::FileType;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            account_id: "a1".to_string(),
            full_name: String::new(),
            email: "a@example.com".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn test_default_file_queries() {
        let queries = AppwriteBackend::file_queries(&user(), &FileQuery::all_newest_first());
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[1], Query::order_desc("$createdAt"));
    }

    #[test]
    fn test_filtered_file_queries() {
        let query = FileQuery::all_newest_first()
            .with_types([FileType::Image, FileType::Video])
            .with_search("  holiday ")
            .with_sort(SortField::asc("name"))
            .with_limit(10);
        let queries = AppwriteBackend::file_queries(&user(), &query);

        assert_eq!(
            queries,
            vec![
                Query::or([
                    Query::equal("owner", ["u1"]),
                    Query::contains("users", ["a@example.com"]),
                ]),
                Query::equal("type", ["image", "video"]),
                Query::contains("name", ["holiday"]),
                Query::limit(10),
                Query::order_asc("name"),
            ]
        );
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        let config = BackendConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(AppwriteBackend::new(&config).is_err());
    }
}
