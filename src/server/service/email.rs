//! Outbound email: templated sends through the transactional mail API,
//! and the codec for the encrypted reply addresses that let recipients
//! answer a notification by email.

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use once_cell::sync::Lazy;
use rand::RngCore;
use regex::Regex;
use serde::Serialize;
use serde_json::json;

use crate::server::error::{AppError, ConfigError, ReplyAddressError};

const SEND_URL: &str = "https://api.sendwithus.com/api/v1/send";

const TEMPLATE_PASSWORD_RESET: &str = "tem_mccpcJNEzS4822mAnDNmGT";
const TEMPLATE_INVITATION: &str = "tem_ZXZuvouDYKKhCrdEWYbEp9";
const TEMPLATE_NEW_COMMENT: &str = "tem_tP6JzrYzvvDXhgTNmtkxuW";
const TEMPLATE_POST_MENTION: &str = "tem_wXiqtyNzAr8EF4fqBna5WQ";
const TEMPLATE_COMMUNITY_DIGEST: &str = "tem_rkZiuPHBvLDFrZ6rv8VixH";

const DEFAULT_SENDER_NAME: &str = "Commons";
const INVITATION_VERSION: &str = "user-edited text";

const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

/// Envelope sender fields attached to a templated send.
#[derive(Debug, Clone, Serialize)]
pub struct EmailSender {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Options for a notification send with a custom sender.
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub email: String,
    pub data: serde_json::Value,
    pub sender: EmailSender,
    pub version: Option<String>,
}

/// Options for an invitation send. The invitation appears to come from
/// the inviting user, with replies routed to their own address.
#[derive(Debug, Clone)]
pub struct InvitationOptions {
    pub email: String,
    pub inviter_name: String,
    pub inviter_email: String,
    pub data: serde_json::Value,
}

#[derive(Clone)]
pub struct Mailer {
    http_client: reqwest::Client,
    api_key: String,
    default_sender_address: String,
}

impl Mailer {
    pub fn new(http_client: reqwest::Client, api_key: String, sender_address: String) -> Self {
        Self {
            http_client,
            api_key,
            default_sender_address: sender_address,
        }
    }

    pub async fn send_password_reset(
        &self,
        email: String,
        data: serde_json::Value,
    ) -> Result<(), AppError> {
        let body = self.payload(TEMPLATE_PASSWORD_RESET, &email, data, None, None);
        self.send(body).await
    }

    pub async fn send_invitation(&self, opts: InvitationOptions) -> Result<(), AppError> {
        let sender = EmailSender {
            address: None,
            name: format!("{} (via {})", opts.inviter_name, DEFAULT_SENDER_NAME),
            reply_to: Some(opts.inviter_email),
        };
        let body = self.payload(
            TEMPLATE_INVITATION,
            &opts.email,
            opts.data,
            Some(sender),
            Some(INVITATION_VERSION),
        );
        self.send(body).await
    }

    pub async fn send_new_comment_notification(&self, opts: SendOptions) -> Result<(), AppError> {
        let body = self.payload(
            TEMPLATE_NEW_COMMENT,
            &opts.email,
            opts.data,
            Some(opts.sender),
            opts.version.as_deref(),
        );
        self.send(body).await
    }

    pub async fn send_post_mention_notification(&self, opts: SendOptions) -> Result<(), AppError> {
        let body = self.payload(
            TEMPLATE_POST_MENTION,
            &opts.email,
            opts.data,
            Some(opts.sender),
            None,
        );
        self.send(body).await
    }

    pub async fn send_community_digest(
        &self,
        email: String,
        data: serde_json::Value,
    ) -> Result<(), AppError> {
        let body = self.payload(TEMPLATE_COMMUNITY_DIGEST, &email, data, None, None);
        self.send(body).await
    }

    fn payload(
        &self,
        template_id: &str,
        email: &str,
        data: serde_json::Value,
        sender: Option<EmailSender>,
        version: Option<&str>,
    ) -> serde_json::Value {
        let mut sender = sender.unwrap_or_else(|| EmailSender {
            address: None,
            name: String::from(DEFAULT_SENDER_NAME),
            reply_to: None,
        });
        if sender.address.is_none() {
            sender.address = Some(self.default_sender_address.clone());
        }

        let mut body = json!({
            "email_id": template_id,
            "recipient": { "address": email },
            "email_data": data,
            "sender": sender,
        });
        if let Some(version) = version {
            body["version_name"] = json!(version);
        }
        body
    }

    async fn send(&self, body: serde_json::Value) -> Result<(), AppError> {
        self.http_client
            .post(SEND_URL)
            .basic_auth(&self.api_key, Some(""))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

static REPLY_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"reply-(.*?)@").unwrap());

/// Decoded payload of a reply address: the post to comment on and the
/// user replying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyAddressData {
    pub post_id: String,
    pub user_id: String,
}

/// Mints and decodes the `reply-<token>@<domain>` addresses used as
/// Reply-To on notification emails. The token is AES-256-GCM over
/// `<salt><post_id>|<user_id>`, laid out as nonce followed by
/// ciphertext and base64url-encoded without padding.
#[derive(Clone)]
pub struct ReplyAddressCodec {
    cipher: Aes256Gcm,
    salt: String,
    domain: String,
}

impl ReplyAddressCodec {
    pub fn new(key_base64: &str, salt: String, domain: String) -> Result<Self, ConfigError> {
        let key = STANDARD
            .decode(key_base64)
            .map_err(|_| ConfigError::InvalidReplyAddressKey(String::from("not valid base64")))?;
        if key.len() != KEY_LEN {
            return Err(ConfigError::InvalidReplyAddressKey(format!(
                "expected {} bytes, got {}",
                KEY_LEN,
                key.len()
            )));
        }
        Ok(Self {
            cipher: Aes256Gcm::new(GenericArray::from_slice(&key)),
            salt,
            domain,
        })
    }

    pub fn post_reply_address(&self, post_id: i32, user_id: i32) -> Result<String, AppError> {
        let plaintext = format!("{}{}|{}", self.salt, post_id, user_id);

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| AppError::InternalError(String::from("reply address encryption failed")))?;

        let mut raw = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        raw.extend_from_slice(&nonce_bytes);
        raw.extend_from_slice(&ciphertext);

        Ok(format!(
            "reply-{}@{}",
            URL_SAFE_NO_PAD.encode(raw),
            self.domain
        ))
    }

    pub fn decode_post_reply_address(
        &self,
        address: &str,
    ) -> Result<ReplyAddressData, ReplyAddressError> {
        let token = REPLY_TOKEN_RE
            .captures(address)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| ReplyAddressError::NotAReplyAddress(address.to_string()))?;

        let raw = URL_SAFE_NO_PAD
            .decode(token.as_str())
            .map_err(|_| ReplyAddressError::UndecodableToken)?;
        if raw.len() <= NONCE_LEN {
            return Err(ReplyAddressError::UndecodableToken);
        }
        let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LEN);

        let plaintext_bytes = self
            .cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| ReplyAddressError::DecryptionFailed)?;
        let plaintext =
            String::from_utf8(plaintext_bytes).map_err(|_| ReplyAddressError::MalformedPayload)?;

        let payload = plaintext
            .strip_prefix(&self.salt)
            .ok_or(ReplyAddressError::MissingSaltPrefix)?;
        let (post_id, user_id) = payload
            .split_once('|')
            .ok_or(ReplyAddressError::MalformedPayload)?;

        Ok(ReplyAddressData {
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
        })
    }
}
