use crate::utils::error::{E2eError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Smoke,
    Regression,
    Api,
    Ui,
    Slow,
    Auth,
    Posts,
    Comments,
    Search,
    Navigation,
    Profile,
    Newsfeed,
    Interactions,
    Admin,
}

impl Marker {
    pub const ALL: [Marker; 14] = [
        Marker::Smoke,
        Marker::Regression,
        Marker::Api,
        Marker::Ui,
        Marker::Slow,
        Marker::Auth,
        Marker::Posts,
        Marker::Comments,
        Marker::Search,
        Marker::Navigation,
        Marker::Profile,
        Marker::Newsfeed,
        Marker::Interactions,
        Marker::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Smoke => "smoke",
            Marker::Regression => "regression",
            Marker::Api => "api",
            Marker::Ui => "ui",
            Marker::Slow => "slow",
            Marker::Auth => "auth",
            Marker::Posts => "posts",
            Marker::Comments => "comments",
            Marker::Search => "search",
            Marker::Navigation => "navigation",
            Marker::Profile => "profile",
            Marker::Newsfeed => "newsfeed",
            Marker::Interactions => "interactions",
            Marker::Admin => "admin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Marker::Smoke => "Critical path tests, run on every deploy",
            Marker::Regression => "Full regression suite",
            Marker::Api => "Backend API tests, no browser needed",
            Marker::Ui => "Browser tests driven through page objects",
            Marker::Slow => "Tests that take noticeably longer",
            Marker::Auth => "Login, registration and logout",
            Marker::Posts => "Creating, editing and deleting posts",
            Marker::Comments => "Post and block comments",
            Marker::Search => "Search bar, suggestions and results",
            Marker::Navigation => "Sidebar and header navigation",
            Marker::Profile => "User profile pages",
            Marker::Newsfeed => "Newsfeed loading and post cards",
            Marker::Interactions => "Votes, saves, reposts and reactions",
            Marker::Admin => "Admin dashboard and management screens",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Marker {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self> {
        Marker::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| E2eError::InvalidConfigValueError {
                field: "E2E_MARKERS".to_string(),
                value: s.to_string(),
                reason: "Unknown marker, run `blog-e2e markers` for the list".to_string(),
            })
    }
}

/// Boolean marker selection such as `smoke and not admin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerExpr {
    Any,
    Is(Marker),
    Not(Box<MarkerExpr>),
    And(Box<MarkerExpr>, Box<MarkerExpr>),
    Or(Box<MarkerExpr>, Box<MarkerExpr>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Not,
    And,
    Or,
    Open,
    Close,
}

fn flush(current: &mut String, tokens: &mut Vec<Token>) {
    if current.is_empty() {
        return;
    }
    let token = match current.as_str() {
        "not" => Token::Not,
        "and" => Token::And,
        "or" => Token::Or,
        _ => Token::Ident(current.clone()),
    };
    tokens.push(token);
    current.clear();
}

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        match c {
            '(' | ')' => {
                flush(&mut current, &mut tokens);
                tokens.push(if c == '(' { Token::Open } else { Token::Close });
            }
            c if c.is_whitespace() => flush(&mut current, &mut tokens),
            c => current.push(c),
        }
    }
    flush(&mut current, &mut tokens);
    tokens
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn error(&self, reason: impl Into<String>) -> E2eError {
        E2eError::InvalidConfigValueError {
            field: "E2E_MARKERS".to_string(),
            value: self.input.to_string(),
            reason: reason.into(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn or_expr(&mut self) -> Result<MarkerExpr> {
        let mut left = self.and_expr()?;
        while self.peek() == Some(&Token::Or) {
            self.pos += 1;
            let right = self.and_expr()?;
            left = MarkerExpr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<MarkerExpr> {
        let mut left = self.not_expr()?;
        while self.peek() == Some(&Token::And) {
            self.pos += 1;
            let right = self.not_expr()?;
            left = MarkerExpr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn not_expr(&mut self) -> Result<MarkerExpr> {
        if self.peek() == Some(&Token::Not) {
            self.pos += 1;
            return Ok(MarkerExpr::Not(Box::new(self.not_expr()?)));
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<MarkerExpr> {
        match self.next() {
            Some(Token::Ident(name)) => Ok(MarkerExpr::Is(name.parse()?)),
            Some(Token::Open) => {
                let inner = self.or_expr()?;
                match self.next() {
                    Some(Token::Close) => Ok(inner),
                    _ => Err(self.error("Missing closing parenthesis")),
                }
            }
            Some(other) => Err(self.error(format!("Unexpected token {:?}", other))),
            None => Err(self.error("Expression ended early")),
        }
    }
}

impl MarkerExpr {
    pub fn parse(input: &str) -> Result<Self> {
        let tokens = tokenize(input);
        if tokens.is_empty() {
            return Ok(MarkerExpr::Any);
        }

        let mut parser = Parser {
            input,
            tokens,
            pos: 0,
        };
        let expr = parser.or_expr()?;
        if parser.pos < parser.tokens.len() {
            return Err(parser.error("Trailing input after expression"));
        }
        Ok(expr)
    }

    pub fn matches(&self, markers: &[Marker]) -> bool {
        match self {
            MarkerExpr::Any => true,
            MarkerExpr::Is(marker) => markers.contains(marker),
            MarkerExpr::Not(inner) => !inner.matches(markers),
            MarkerExpr::And(a, b) => a.matches(markers) && b.matches(markers),
            MarkerExpr::Or(a, b) => a.matches(markers) || b.matches(markers),
        }
    }
}
