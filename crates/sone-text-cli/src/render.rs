use sone_text_engine::Part;

/// One human-readable line per part.
pub fn describe(part: &Part) -> String {
    match part {
        Part::PlainText { text } => format!("text      {text:?}"),
        Part::ExternalLink { link, text, .. } => format!("link      {text:?} -> {link}"),
        Part::NetworkLink {
            link,
            text,
            trusted,
            ..
        } => {
            let marker = if *trusted { " (trusted)" } else { "" };
            format!("key       {text:?} -> {link}{marker}")
        }
        Part::PostReference { post } => format!("post      {:?} -> post://{}", post.text, post.id),
        Part::IdentityReference { identity } => {
            let known = if identity.name.is_some() { "" } else { " (unknown)" };
            format!(
                "identity  {:?} -> sone://{}{known}",
                identity.display_name(),
                identity.id
            )
        }
        Part::MailReference {
            local_part,
            mail_domain_id,
            decoded_id,
        } => format!("mail      {local_part}@{mail_domain_id}.freemail -> {decoded_id}"),
    }
}

pub fn render_listing(parts: &[Part]) -> String {
    parts.iter().map(|part| describe(part) + "\n").collect()
}

pub fn render_json(parts: &[Part]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(parts)
}
