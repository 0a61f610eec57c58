#[cfg(test)]
pub mod fixtures {
    pub const SAMPLE_DOCUMENT: &str = "The sky is blue.";

    pub const MULTIPART_BOUNDARY: &str = "----quizgen-test-boundary";

    /// A questions-mode reply with blank lines between entries.
    pub fn questions_response() -> &'static str {
        "1. What colour is the sky?\n\n2. Why does the sky look blue?\n3. When does the sky turn red?\n"
    }

    /// A quiz reply: one item with lettered options, one without.
    pub fn mcq_response() -> &'static str {
        "1. What colour is the sky?\n\
         A) Red\n\
         B) Blue\n\
         C) Green\n\
         D) Yellow\n\
         What colour is the sky? Correct answer: B) Blue\n\
         \n\
         2. Is the sky ever red? Correct answer: Yes, at sunset"
    }

    /// Builds a `multipart/form-data` body with text fields and an optional
    /// `file` part. Returns the content type and the body.
    pub fn multipart_body(
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> (String, Vec<u8>) {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    MULTIPART_BOUNDARY, name, value
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, content)) = file {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: text/plain\r\n\r\n",
                    MULTIPART_BOUNDARY, file_name
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

        (
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
            body,
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{
        models::domain::{GeneratedItems, OptionsSource},
        services::{McqParser, QuestionListParser, ResponseParser},
    };

    #[test]
    fn test_fixtures_questions_response_has_three_lines() {
        assert_eq!(QuestionListParser.parse(questions_response()).len(), 3);
    }

    #[test]
    fn test_fixtures_mcq_response_items() {
        let GeneratedItems::Quiz(items) = McqParser.parse(mcq_response()) else {
            panic!("expected quiz items");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].options_source, OptionsSource::Parsed);
        assert_eq!(items[0].correct_answer, "B) Blue");
        assert_eq!(items[1].options_source, OptionsSource::Placeholder);
    }

    #[test]
    fn test_fixtures_multipart_body_shape() {
        let (content_type, body) =
            multipart_body(&[("task", "mcq")], Some(("a.txt", b"hi".as_slice())));
        let body = String::from_utf8(body).unwrap();

        assert!(content_type.ends_with(MULTIPART_BOUNDARY));
        assert!(body.contains("name=\"task\"\r\n\r\nmcq\r\n"));
        assert!(body.contains("filename=\"a.txt\""));
        assert!(body.ends_with(&format!("--{}--\r\n", MULTIPART_BOUNDARY)));
    }
}
