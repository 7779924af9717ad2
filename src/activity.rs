use std::io::Write;

use crate::{
    backends::github::{EventRecord, Username},
    config::Config,
    error::ErrorCode,
    events::describe_record,
    service::ServiceHandler,
};

/// Counters for one pass over an activity feed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    /// Events written to the output.
    pub described: usize,
    /// Events with an unhandled type.
    pub ignored: usize,
    /// Events which could not be described.
    pub skipped: usize,
}

pub struct ActivityFeed<'a> {
    config: &'a Config,
    services: &'a ServiceHandler,
}

impl<'a> ActivityFeed<'a> {
    pub fn new(config: &'a Config, services: &'a ServiceHandler) -> Self {
        Self { config, services }
    }

    /// Fetch the feed of `username` and write one line per described event.
    #[tracing::instrument(skip(self, out))]
    pub async fn print<W: Write>(
        &self,
        username: &Username,
        out: &mut W,
    ) -> Result<FeedSummary, ErrorCode> {
        let records = self.services.events().fetch_user_events(username).await?;
        let summary = self.render(&records, out)?;

        tracing::info!(
            described = summary.described,
            ignored = summary.ignored,
            skipped = summary.skipped,
            message = "Activity feed described"
        );

        Ok(summary)
    }

    /// Write the description of each record, in feed order.
    ///
    /// Events which cannot be described are logged and skipped, unless the
    /// configuration is strict, in which case the first one aborts the pass.
    pub fn render<W: Write>(
        &self,
        records: &[EventRecord],
        out: &mut W,
    ) -> Result<FeedSummary, ErrorCode> {
        let mut summary = FeedSummary::default();

        for record in records {
            match describe_record(record) {
                Ok(Some(line)) => {
                    writeln!(out, "{line}")?;
                    summary.described += 1;
                }
                Ok(None) => {
                    tracing::debug!(
                        event_type = record.event_type.as_str(),
                        message = "Ignoring unsupported event"
                    );
                    summary.ignored += 1;
                }
                Err(e) if self.config.strict() => return Err(e.into()),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        event_type = record.event_type.as_str(),
                        repo = record.repo_name(),
                        message = "Skipping malformed event"
                    );
                    summary.skipped += 1;
                }
            }
        }

        out.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::{any::Any, sync::Arc};

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use pseudo::Mock;
    use serde_json::json;
    use wiremock::{matchers, MockServer, ResponseTemplate};

    use crate::{
        backends::{
            github::{EventRecord, GitHubError, Username},
            EventSource,
        },
        config::Config,
        error::ErrorCode,
        events::EventError,
        service::ServiceHandler,
    };

    use super::{ActivityFeed, FeedSummary};

    #[derive(Debug)]
    struct FakeEventSource {
        pub fetch_user_events: Mock<String, Vec<EventRecord>>,
    }

    impl FakeEventSource {
        pub fn new(records: Vec<EventRecord>) -> Self {
            Self {
                fetch_user_events: Mock::new(records),
            }
        }
    }

    #[async_trait]
    impl EventSource for FakeEventSource {
        async fn fetch_user_events(
            &self,
            username: &Username,
        ) -> Result<Vec<EventRecord>, GitHubError> {
            Ok(self.fetch_user_events.call(username.to_string()))
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn sample_records() -> Vec<EventRecord> {
        serde_json::from_value(json!([
            {
                "type": "PushEvent",
                "repo": { "name": "octocat/hello" },
                "payload": { "size": 1 }
            },
            {
                "type": "ForkEvent",
                "repo": { "name": "octocat/hello" },
                "payload": {}
            },
            {
                "type": "CreateEvent",
                "repo": { "name": "octocat/hello" },
                "payload": { "ref_type": "" }
            },
            {
                "type": "DeleteEvent",
                "repo": { "name": "octocat/world" },
                "payload": { "ref_type": "tag" }
            }
        ]))
        .unwrap()
    }

    fn create_test_services(records: Vec<EventRecord>) -> ServiceHandler {
        ServiceHandler::new(Arc::new(FakeEventSource::new(records)))
    }

    fn extract_fake_event_source(services: &ServiceHandler) -> &FakeEventSource {
        services
            .events()
            .as_any()
            .downcast_ref::<FakeEventSource>()
            .unwrap()
    }

    fn octocat() -> Username {
        Username::new("octocat").unwrap()
    }

    #[tokio::test]
    async fn test_print_skips_malformed_events() {
        let config = Config::empty();
        let services = create_test_services(sample_records());
        let mut out = Vec::new();

        let summary = ActivityFeed::new(&config, &services)
            .print(&octocat(), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Pushed 1 commit to octocat/hello\nDeleted tag octocat/world\n"
        );
        assert_eq!(
            summary,
            FeedSummary {
                described: 2,
                ignored: 1,
                skipped: 1
            }
        );
        assert!(extract_fake_event_source(&services)
            .fetch_user_events
            .called());
    }

    #[tokio::test]
    async fn test_print_strict_aborts_on_malformed_event() {
        let mut config = Config::empty();
        config.set_strict(true);
        let services = create_test_services(sample_records());
        let mut out = Vec::new();

        let err = ActivityFeed::new(&config, &services)
            .print(&octocat(), &mut out)
            .await
            .unwrap_err();

        assert_matches!(err, ErrorCode::MalformedEvent(EventError::RefType { .. }));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Pushed 1 commit to octocat/hello\n"
        );
    }

    #[tokio::test]
    async fn test_print_empty_feed() {
        let config = Config::empty();
        let services = create_test_services(vec![]);
        let mut out = Vec::new();

        let summary = ActivityFeed::new(&config, &services)
            .print(&octocat(), &mut out)
            .await
            .unwrap();

        assert!(out.is_empty());
        assert_eq!(summary, FeedSummary::default());
    }

    #[tokio::test]
    async fn test_print_from_github() {
        let server = MockServer::start().await;
        let mut config = Config::empty();
        config.set_github_api_url(server.uri());
        let services = ServiceHandler::new_defaults(&config);

        wiremock::Mock::given(matchers::method("GET"))
            .and(matchers::path("/users/octocat/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "type": "IssuesEvent",
                    "repo": { "name": "r" },
                    "payload": {
                        "action": "assigned",
                        "issue": { "number": 42, "title": "T" },
                        "assignee": { "login": "A" }
                    }
                },
                {
                    "type": "PushEvent",
                    "repo": { "name": "r" },
                    "payload": { "size": 2 }
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        ActivityFeed::new(&config, &services)
            .print(&octocat(), &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Issue 42. T for r is assigned to A\nPushed 2 commits to r\n"
        );
    }

    #[tokio::test]
    async fn test_print_unknown_user() {
        let server = MockServer::start().await;
        let mut config = Config::empty();
        config.set_github_api_url(server.uri());
        let services = ServiceHandler::new_defaults(&config);

        wiremock::Mock::given(matchers::method("GET"))
            .and(matchers::path("/users/octocat/events"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let err = ActivityFeed::new(&config, &services)
            .print(&octocat(), &mut out)
            .await
            .unwrap_err();

        assert_matches!(err, ErrorCode::GitHub(GitHubError::NotFound));
        assert_eq!(err.details().exit_code(), 5);
        assert!(out.is_empty());
    }
}
