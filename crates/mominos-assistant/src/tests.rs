#[cfg(test)]
mod canned_tests {
    use chrono::{TimeZone, Utc};

    use crate::{
        canned::canned_reply,
        message::{ActionKind, Intent},
    };

    fn noon() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    #[test]
    fn launches_apps() {
        let reply = canned_reply("Please open the calculator", noon());
        assert_eq!(reply.content, "Opening Calculator for you!");
        assert_eq!(reply.intent, Intent::OpenApp);
        assert_eq!(reply.actions.len(), 1);
        assert_eq!(reply.actions[0].kind, ActionKind::OpenApp);
        assert_eq!(reply.actions[0].value, "calculator");

        let reply = canned_reply("launch files", noon());
        assert_eq!(reply.actions[0].value, "files");
    }

    #[test]
    fn searches_the_web() {
        let reply = canned_reply("search for rust & wasm", noon());
        assert_eq!(reply.content, "Searching for \"rust & wasm\" on the web!");
        assert_eq!(
            reply.actions[0].value,
            "https://www.google.com/search?q=rust%20%26%20wasm"
        );
        assert_eq!(reply.actions[1].value, "browser");
    }

    #[test]
    fn tells_the_time() {
        let reply = canned_reply("What time is it?", noon());
        assert_eq!(reply.content, "The current time is 2:07:09 PM. Today is 3/5/2024.");
        assert!(reply.actions.is_empty());
    }

    #[test]
    fn fixed_links() {
        assert_eq!(
            canned_reply("youtube", noon()).actions[0].value,
            "https://www.youtube.com"
        );
        assert_eq!(
            canned_reply("take me to github", noon()).actions[0].value,
            "https://www.github.com"
        );
        assert_eq!(
            canned_reply("how is the weather", noon()).actions[0].value,
            "https://weather.com"
        );
    }

    #[test]
    fn greetings_need_a_whole_word() {
        assert!(canned_reply("hi there", noon()).content.starts_with("Hello!"));
        assert!(canned_reply("this thing", noon()).content.starts_with("I understand"));
    }

    #[test]
    fn default_offers_search() {
        let reply = canned_reply("quantum pancakes", noon());
        assert!(reply.content.contains("\"quantum pancakes\""));
        assert_eq!(
            reply.actions[0].value,
            "https://www.google.com/search?q=quantum%20pancakes"
        );
    }
}

#[cfg(test)]
mod intent_tests {
    use crate::{
        intent::classify,
        message::{ActionKind, Intent},
    };

    #[test]
    fn open_app() {
        let (intent, actions) = classify("Open terminal please");
        assert_eq!(intent, Intent::OpenApp);
        assert_eq!(actions[0].value, "terminal");

        let (intent, actions) = classify("open something odd");
        assert_eq!(intent, Intent::OpenApp);
        assert!(actions.is_empty());
    }

    #[test]
    fn other_intents() {
        let (intent, actions) = classify("create a new file");
        assert_eq!(intent, Intent::FileManagement);
        assert_eq!(actions[0].kind, ActionKind::CreateFile);

        let (intent, actions) = classify("search cats");
        assert_eq!(intent, Intent::Search);
        assert_eq!(actions[0].value, "cats");

        assert_eq!(classify("write an email to bob").0, Intent::Communication);
        assert_eq!(classify("add a reminder").0, Intent::Reminder);
        assert_eq!(classify("tell me a joke").0, Intent::General);
    }
}

#[cfg(test)]
mod keywords_tests {
    use crate::keywords::{encode_component, strip_verbs};

    #[test]
    fn strips_verbs() {
        assert_eq!(strip_verbs("search for cats", &["search"]), "cats");
        assert_eq!(strip_verbs("Google   dogs", &["google"]), "dogs");
        assert_eq!(strip_verbs("search", &["search"]), "search");
        assert_eq!(strip_verbs("please look for keys", &["look for"]), "please keys");
    }

    #[test]
    fn encodes_like_browsers() {
        assert_eq!(encode_component("a b/c?d=é"), "a%20b%2Fc%3Fd%3D%C3%A9");
        assert_eq!(encode_component("it's (fine)!~*"), "it's%20(fine)!~*");
    }
}

#[cfg(test)]
mod assistant_tests {
    use std::cell::Cell;

    use chrono::Utc;
    use futures::executor::block_on;

    use crate::{
        backend::{failure, parse_reply, CompletionBackend, CompletionRequest, FetchBackend},
        error::Error,
        message::{Intent, Role},
        Assistant, HISTORY_WINDOW,
    };

    /// Answers with a fixed outcome and counts the calls
    struct FakeBackend {
        outcome: Result<String, Error>,
        calls: Cell<usize>,
    }

    impl FakeBackend {
        fn new(outcome: Result<String, Error>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl CompletionBackend for FakeBackend {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, Error> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    #[test]
    fn remote_reply_is_classified() {
        let mut assistant = Assistant::new(FakeBackend::new(Ok("Sure thing.".to_string())));
        let reply = block_on(assistant.ask("open music"));

        assert_eq!(reply.content, "Sure thing.");
        assert_eq!(reply.intent, Intent::OpenApp);
        assert_eq!(reply.actions[0].value, "music");
        assert_eq!(assistant.history().len(), 2);
        assert_eq!(assistant.history()[0].role, Role::User);
        assert_eq!(assistant.history()[1].role, Role::Assistant);
    }

    #[test]
    fn failure_falls_back_offline() {
        let mut assistant = Assistant::new(FakeBackend::new(Err(Error::Http(500))));
        let reply = block_on(assistant.ask("hello"));

        assert_eq!(reply.intent, Intent::Offline);
        assert!(reply.content.contains("offline mode"));
        assert!(!assistant.is_quota_exceeded());
    }

    #[test]
    fn quota_latches_until_success() {
        let mut assistant = Assistant::new(FakeBackend::new(Err(Error::QuotaExceeded)));
        block_on(assistant.ask("hello"));
        assert!(assistant.is_quota_exceeded());
        assert_eq!(assistant.backend().calls.get(), 1);

        block_on(assistant.ask("hello again"));
        assert_eq!(assistant.backend().calls.get(), 1);

        let request = assistant.prepare("one more");
        assert!(request.is_none());
        let reply = assistant.finish("one more", Some(Ok("Back online".to_string())), Utc::now());
        assert_eq!(reply.content, "Back online");
        assert!(!assistant.is_quota_exceeded());
    }

    #[test]
    fn request_carries_the_last_messages() {
        let mut assistant = Assistant::new(FakeBackend::new(Ok("ok".to_string())));
        for i in 0..8 {
            block_on(assistant.ask(&format!("message {}", i)));
        }
        let request = assistant.prepare("latest").unwrap();
        assert_eq!(request.messages.len(), HISTORY_WINDOW);
        assert_eq!(request.messages.last().unwrap().content, "latest");
        assert_eq!(request.messages.last().unwrap().role, "user");
    }

    #[test]
    fn local_replies_are_recorded() {
        let mut assistant = Assistant::new(FakeBackend::new(Ok("unused".to_string())));
        let reply = assistant.respond_locally("thanks!", Utc::now());
        assert!(reply.content.starts_with("You're very welcome!"));
        assert_eq!(assistant.history().len(), 2);
        assert_eq!(assistant.backend().calls.get(), 0);
    }

    #[test]
    fn response_parsing() {
        let body = r#"{"content":[{"type":"text","text":"Hi!"}]}"#;
        assert_eq!(parse_reply(body), Ok("Hi!".to_string()));
        assert!(matches!(parse_reply("{}"), Err(Error::Malformed(_))));
        assert!(matches!(parse_reply(r#"{"content":[]}"#), Err(Error::Malformed(_))));

        assert_eq!(failure(429, ""), Error::QuotaExceeded);
        assert_eq!(failure(400, "Quota exceeded for key"), Error::QuotaExceeded);
        assert_eq!(failure(503, "down"), Error::Http(503));
    }

    #[test]
    fn request_body_shape() {
        let backend = FetchBackend::new("key");
        let request = CompletionRequest {
            system: "ctx".to_string(),
            messages: Vec::new(),
        };
        let body: serde_json::Value = serde_json::from_str(&backend.body(&request).unwrap()).unwrap();
        assert_eq!(body["system"], "ctx");
        assert_eq!(body["max_tokens"], 1000);
        assert!(body["messages"].as_array().unwrap().is_empty());
    }
}
