//! Supported languages and template-selection tags.

use anyhow::Result;

use crate::ui::Style;

/// A language the assistant can translate from or to.
///
/// This is a closed set: the prompt templates are tuned for exactly these
/// languages. Parsing accepts common short aliases (`js`, `cpp`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Cpp,
    CSharp,
    C,
    Php,
    R,
    Sql,
    Html,
    Css,
}

/// How a target language is handled by the prompt builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageKind {
    /// General-purpose languages: translated code-to-code.
    Programming,
    /// Markup/style languages: the source is represented as a webpage.
    Markup,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Java,
        Self::Cpp,
        Self::CSharp,
        Self::C,
        Self::Php,
        Self::R,
        Self::Sql,
        Self::Html,
        Self::Css,
    ];

    /// The display name used in prompts and listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::C => "C",
            Self::Php => "PHP",
            Self::R => "R",
            Self::Sql => "SQL",
            Self::Html => "HTML",
            Self::Css => "CSS",
        }
    }

    /// The template-selection tag for this language.
    pub const fn kind(self) -> LanguageKind {
        match self {
            Self::Html | Self::Css => LanguageKind::Markup,
            Self::Python
            | Self::JavaScript
            | Self::TypeScript
            | Self::Java
            | Self::Cpp
            | Self::CSharp
            | Self::C
            | Self::Php
            | Self::R
            | Self::Sql => LanguageKind::Programming,
        }
    }

    /// Parses a language name or alias (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error listing the supported names if the input does not
    /// match any of them.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_ascii_lowercase();

        let language = match normalized.as_str() {
            "python" | "py" => Self::Python,
            "javascript" | "js" => Self::JavaScript,
            "typescript" | "ts" => Self::TypeScript,
            "java" => Self::Java,
            "c++" | "cpp" => Self::Cpp,
            "c#" | "csharp" => Self::CSharp,
            "c" => Self::C,
            "php" => Self::Php,
            "r" => Self::R,
            "sql" => Self::Sql,
            "html" => Self::Html,
            "css" => Self::Css,
            _ => anyhow::bail!(
                "Unsupported language: '{input}'\n\n\
                 Supported: Python, JavaScript, TypeScript, Java, C++, C#, C, PHP, R, SQL, HTML, CSS\n\
                 Run 'lucid languages' to see the full list."
            ),
        };

        Ok(language)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for language in Language::ALL {
        let kind = match language.kind() {
            LanguageKind::Markup => "markup / style",
            LanguageKind::Programming => "programming",
        };
        println!(
            "  {:12} {}",
            Style::value(language.name()),
            Style::secondary(kind)
        );
    }
}
