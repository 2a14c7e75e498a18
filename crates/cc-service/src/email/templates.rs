//! Message builders, one per kind of email

use std::sync::LazyLock;

use cc_core::entities::{Idea, User};
use cc_core::traits::EmailMessage;
use regex::Regex;
use serde_json::json;
use uuid::Uuid;

/// `@@@__<url_slug>^^__<display>@@@^^^`, the markup the comment editor
/// stores for a mention
static MENTION: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"@@@__[^\^]*\^\^__(?P<display>[^@]*)@@@\^\^\^"));

/// Render mention markup as plain `@Display Name`
pub fn linkify_mentions(content: &str) -> String {
    match MENTION.as_ref() {
        Ok(mention) => mention.replace_all(content, "@$display").into_owned(),
        Err(_) => content.to_string(),
    }
}

/// Frontend URLs that emails link to
#[derive(Debug, Clone, Copy)]
pub struct EmailLinks<'a> {
    pub frontend_url: &'a str,
}

impl EmailLinks<'_> {
    pub fn idea(&self, idea: &Idea) -> String {
        format!("{}/ideas/{}", self.frontend_url, idea.url_slug)
    }

    pub fn idea_comments(&self, idea: &Idea) -> String {
        format!("{}#comments", self.idea(idea))
    }

    pub fn chat(&self, chat_uuid: Uuid) -> String {
        format!("{}/chat/{chat_uuid}", self.frontend_url)
    }
}

pub fn verification_email(user: &User, verification_url: &str, template_id: u64) -> EmailMessage {
    EmailMessage {
        to_email: user.email.clone(),
        to_name: user.full_name(),
        subject: "Welcome to Climate Connect! Verify your email address".to_string(),
        template_id,
        variables: json!({
            "FirstName": user.first_name,
            "url": verification_url,
        }),
    }
}

/// Tells an idea's owner or supporter that someone joined it. Links to the
/// idea's group chat when there is one, otherwise to the idea.
pub fn idea_join_email(
    recipient: &User,
    joiner: &User,
    idea: &Idea,
    chat_uuid: Option<Uuid>,
    links: EmailLinks<'_>,
    template_id: u64,
) -> EmailMessage {
    let url = chat_uuid.map_or_else(|| links.idea(idea), |uuid| links.chat(uuid));
    let joiner_name = joiner.full_name();

    EmailMessage {
        to_email: recipient.email.clone(),
        to_name: recipient.full_name(),
        subject: format!("{joiner_name} joined the idea '{}' on Climate Connect", idea.name),
        template_id,
        variables: json!({
            "FirstName": recipient.first_name,
            "JoiningUserName": joiner_name,
            "IdeaName": idea.name,
            "url": url,
        }),
    }
}

/// Comment on the recipient's idea, or a reply to their comment
pub fn idea_comment_email(
    recipient: &User,
    commenter: &User,
    idea: &Idea,
    comment: &str,
    is_reply: bool,
    links: EmailLinks<'_>,
    template_id: u64,
) -> EmailMessage {
    let subject = if is_reply {
        "Someone replied to your comment on Climate Connect".to_string()
    } else {
        format!(
            "Somebody left a comment on your idea '{}' on Climate Connect",
            idea.name
        )
    };

    EmailMessage {
        to_email: recipient.email.clone(),
        to_name: recipient.full_name(),
        subject,
        template_id,
        variables: json!({
            "FirstName": recipient.first_name,
            "CommenterName": commenter.full_name(),
            "CommentText": linkify_mentions(comment),
            "IdeaName": idea.name,
            "url": links.idea_comments(idea),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_core::value_objects::{IdeaId, UserId};
    use chrono::Utc;

    fn user(id: i64, first: &str) -> User {
        User {
            id: UserId::new(id),
            username: format!("{}@example.com", first.to_lowercase()),
            email: format!("{}@example.com", first.to_lowercase()),
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn idea() -> Idea {
        Idea {
            id: IdeaId::new(5),
            name: "Tool library".to_string(),
            url_slug: "tool-library".to_string(),
            owner_id: UserId::new(1),
            chat_uuid: None,
            created_at: Utc::now(),
        }
    }

    const LINKS: EmailLinks<'static> = EmailLinks {
        frontend_url: "https://climateconnect.earth",
    };

    #[test]
    fn test_linkify_mentions() {
        let content = "Thanks @@@__adalovelace3^^__Ada Lovelace@@@^^^ and \
                       @@@__alanturing9^^__Alan Turing@@@^^^!";
        assert_eq!(linkify_mentions(content), "Thanks @Ada Lovelace and @Alan Turing!");
    }

    #[test]
    fn test_linkify_without_mentions() {
        assert_eq!(linkify_mentions("plain @text"), "plain @text");
    }

    #[test]
    fn test_join_email_links_chat_when_known() {
        let chat = Uuid::new_v4();
        let message = idea_join_email(&user(1, "Owner"), &user(2, "Joiner"), &idea(), Some(chat), LINKS, 7);

        assert_eq!(message.to_email, "owner@example.com");
        assert_eq!(message.template_id, 7);
        assert_eq!(message.variables["JoiningUserName"], "Joiner Tester");
        assert_eq!(
            message.variables["url"],
            format!("https://climateconnect.earth/chat/{chat}")
        );

        let without_chat = idea_join_email(&user(1, "Owner"), &user(2, "Joiner"), &idea(), None, LINKS, 7);
        assert_eq!(
            without_chat.variables["url"],
            "https://climateconnect.earth/ideas/tool-library"
        );
    }

    #[test]
    fn test_comment_email_renders_mentions() {
        let message = idea_comment_email(
            &user(1, "Owner"),
            &user(2, "Commenter"),
            &idea(),
            "Ask @@@__owner1^^__Owner@@@^^^",
            false,
            LINKS,
            9,
        );

        assert_eq!(message.variables["CommentText"], "Ask @Owner");
        assert_eq!(
            message.variables["url"],
            "https://climateconnect.earth/ideas/tool-library#comments"
        );
        assert!(message.subject.contains("Tool library"));

        let reply = idea_comment_email(&user(1, "Owner"), &user(2, "C"), &idea(), "ok", true, LINKS, 9);
        assert_eq!(reply.subject, "Someone replied to your comment on Climate Connect");
    }

    #[test]
    fn test_verification_email() {
        let message = verification_email(&user(3, "Ada"), "https://x/activate?id=3", 11);
        assert_eq!(message.to_name, "Ada Tester");
        assert_eq!(message.variables["url"], "https://x/activate?id=3");
    }
}
