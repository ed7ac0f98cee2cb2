//! Random test data on top of the `fake` crate.

use ::fake::faker::internet::en::SafeEmail;
use ::fake::faker::lorem::en::{Sentence, Word, Words};
use ::fake::faker::name::en::{FirstName, LastName, Name};
use ::fake::Fake;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Unique within the process and very unlikely to repeat across runs.
pub fn unique_suffix() -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let nonce: u32 = rand::rng().random_range(0..100_000);
    format!("{}{:05}{}", chrono::Utc::now().timestamp_millis(), nonce, seq)
}

pub fn first_name() -> String {
    FirstName().fake()
}

pub fn last_name() -> String {
    LastName().fake()
}

pub fn full_name() -> String {
    Name().fake()
}

/// Safe-domain address with a unique local part, so repeated registrations never collide.
pub fn email() -> String {
    let address: String = SafeEmail().fake();
    match address.split_once('@') {
        Some((local, domain)) => format!("{}.{}@{}", local, unique_suffix(), domain),
        None => format!("user.{}@example.com", unique_suffix()),
    }
}

pub fn word() -> String {
    Word().fake()
}

pub fn words(count: usize) -> Vec<String> {
    Words(count..count + 1).fake()
}

/// Capitalised sentence of `word_count` words ending with a period.
pub fn sentence(word_count: usize) -> String {
    let n = word_count.max(1);
    let raw: String = Sentence(n..n + 1).fake();
    format!("{}.", capitalize(raw.trim().trim_end_matches('.')))
}

pub fn paragraph(sentence_count: usize) -> String {
    let mut rng = rand::rng();
    (0..sentence_count.max(1))
        .map(|_| sentence(rng.random_range(4..=12)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of at most `max_chars` characters, cut on a word boundary.
pub fn text(max_chars: usize) -> String {
    let mut out = String::new();
    loop {
        let next = sentence(rand::rng().random_range(4..=12));
        let sep = usize::from(!out.is_empty());
        if out.chars().count() + sep + next.chars().count() > max_chars {
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(&next);
    }
    if !out.is_empty() {
        return out;
    }

    let mut cut = String::new();
    for w in words(max_chars.clamp(1, 64)) {
        let sep = usize::from(!cut.is_empty());
        if cut.chars().count() + sep + w.chars().count() > max_chars {
            break;
        }
        if sep == 1 {
            cut.push(' ');
        }
        cut.push_str(&w);
    }
    cut
}

/// Seeded picsum URL; the seed keeps the image stable for one post.
pub fn image_url() -> String {
    let seed: u32 = rand::rng().random_range(1..1_000_000);
    format!("https://picsum.photos/seed/{}/640/480", seed)
}
