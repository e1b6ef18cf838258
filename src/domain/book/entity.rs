use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A single catalogued book.
///
/// The same shape doubles as the edit draft, so every field may be
/// transiently invalid while the user is typing. Serialized field names
/// follow the persisted `livros` payload (`anoPublicacao`, `dataCadastro`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    /// System-assigned identifier, immutable once assigned
    pub id: String,

    /// Title (required on creation)
    pub titulo: String,

    /// Author (required on creation)
    pub autor: String,

    /// Publication year, no range validation
    #[serde(deserialize_with = "deserialize_year")]
    pub ano_publicacao: i32,

    /// Registration date in locale format, set once at creation
    pub data_cadastro: String,

    /// Free-text genre, may be empty
    pub genero: String,

    /// Free-text description, may be empty
    pub descricao: String,
}

/// User-editable fields of a book draft.
/// `id` and `data_cadastro` are system-owned and deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Titulo,
    Autor,
    AnoPublicacao,
    Genero,
    Descricao,
}

impl Book {
    /// The empty draft: every field blank, year zero
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stamp identity and registration date on a draft that is about to be
    /// created. Editable fields are carried over unchanged.
    pub fn registered(mut self, id: String, data_cadastro: String) -> Self {
        self.id = id;
        self.data_cadastro = data_cadastro;
        self
    }

    /// Overwrite exactly one editable field from its textual form value.
    ///
    /// The year accepts surrounding whitespace and treats blank input as 0.
    /// Non-numeric input is rejected and leaves the book untouched.
    pub fn set_field(&mut self, field: BookField, value: &str) -> DomainResult<()> {
        match field {
            BookField::Titulo => self.titulo = value.to_string(),
            BookField::Autor => self.autor = value.to_string(),
            BookField::AnoPublicacao => self.ano_publicacao = parse_year(value)?,
            BookField::Genero => self.genero = value.to_string(),
            BookField::Descricao => self.descricao = value.to_string(),
        }
        Ok(())
    }

    /// Read an editable field back in its textual form
    pub fn field(&self, field: BookField) -> String {
        match field {
            BookField::Titulo => self.titulo.clone(),
            BookField::Autor => self.autor.clone(),
            BookField::AnoPublicacao => self.ano_publicacao.to_string(),
            BookField::Genero => self.genero.clone(),
            BookField::Descricao => self.descricao.clone(),
        }
    }
}

fn parse_year(value: &str) -> DomainResult<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| DomainError::InvalidFieldValue {
            field: BookField::AnoPublicacao.to_string(),
            value: value.to_string(),
        })
}

/// Older payloads stored the year exactly as the number input held it:
/// `1965`, `1965.0`, `"1965"`, `"1815.5"` or `"1e3"`. Fractions are
/// truncated, out-of-range values saturate, and anything unreadable
/// becomes 0 so one odd record never sinks the whole collection.
fn deserialize_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_year(&raw))
}

fn lenient_year(raw: &serde_json::Value) -> i32 {
    match raw {
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(saturate_i64)
            .or_else(|| n.as_f64().map(saturate_f64))
            .unwrap_or(0),
        serde_json::Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .map(saturate_i64)
                .or_else(|_| trimmed.parse::<f64>().map(saturate_f64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn saturate_i64(n: i64) -> i32 {
    n.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// `as` truncates toward zero, saturates, and maps NaN to 0
fn saturate_f64(n: f64) -> i32 {
    n as i32
}

impl BookField {
    /// All editable fields, in form order
    pub const ALL: [BookField; 5] = [
        BookField::Titulo,
        BookField::Autor,
        BookField::AnoPublicacao,
        BookField::Genero,
        BookField::Descricao,
    ];

    /// Human-readable form label
    pub fn label(&self) -> &'static str {
        match self {
            BookField::Titulo => "Title",
            BookField::Autor => "Author",
            BookField::AnoPublicacao => "Publication Year",
            BookField::Genero => "Genre",
            BookField::Descricao => "Description",
        }
    }
}

impl std::str::FromStr for BookField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "titulo" | "title" => Ok(BookField::Titulo),
            "autor" | "author" => Ok(BookField::Autor),
            "anoPublicacao" | "year" | "publicationYear" => Ok(BookField::AnoPublicacao),
            "genero" | "genre" => Ok(BookField::Genero),
            "descricao" | "description" => Ok(BookField::Descricao),
            other => Err(DomainError::UnknownField(other.to_string())),
        }
    }
}

impl std::fmt::Display for BookField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookField::Titulo => write!(f, "titulo"),
            BookField::Autor => write!(f, "autor"),
            BookField::AnoPublicacao => write!(f, "anoPublicacao"),
            BookField::Genero => write!(f, "genero"),
            BookField::Descricao => write!(f, "descricao"),
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.titulo, self.autor, self.ano_publicacao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_overwrites_only_target() {
        let mut book = Book::empty();
        book.set_field(BookField::Titulo, "Dune").unwrap();
        book.set_field(BookField::AnoPublicacao, " 1965 ").unwrap();

        assert_eq!(book.titulo, "Dune");
        assert_eq!(book.ano_publicacao, 1965);
        assert!(book.autor.is_empty());
        assert!(book.id.is_empty());
    }

    #[test]
    fn test_invalid_year_leaves_book_untouched() {
        let mut book = Book::empty();
        book.set_field(BookField::AnoPublicacao, "1965").unwrap();

        let err = book.set_field(BookField::AnoPublicacao, "mid-sixties");
        assert!(matches!(err, Err(DomainError::InvalidFieldValue { .. })));
        assert_eq!(book.ano_publicacao, 1965);
    }

    #[test]
    fn test_blank_year_is_zero() {
        let mut book = Book::empty();
        book.set_field(BookField::AnoPublicacao, "1965").unwrap();
        book.set_field(BookField::AnoPublicacao, "").unwrap();
        assert_eq!(book.ano_publicacao, 0);
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("titulo".parse::<BookField>().unwrap(), BookField::Titulo);
        assert_eq!("year".parse::<BookField>().unwrap(), BookField::AnoPublicacao);
        assert!("id".parse::<BookField>().is_err());
        assert!("dataCadastro".parse::<BookField>().is_err());

        for field in BookField::ALL {
            assert_eq!(field.to_string().parse::<BookField>().unwrap(), field);
        }
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let book = Book {
            id: "1700000000000".to_string(),
            titulo: "Dune".to_string(),
            autor: "Herbert".to_string(),
            ano_publicacao: 1965,
            data_cadastro: "17/10/2026".to_string(),
            genero: String::new(),
            descricao: String::new(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["anoPublicacao"], 1965);
        assert_eq!(json["dataCadastro"], "17/10/2026");
        assert!(json.get("ano_publicacao").is_none());
    }

    #[test]
    fn test_missing_optional_keys_default() {
        let book: Book =
            serde_json::from_str(r#"{"id":"1","titulo":"Dune","autor":"Herbert"}"#).unwrap();
        assert_eq!(book.ano_publicacao, 0);
        assert!(book.genero.is_empty());
        assert!(book.data_cadastro.is_empty());
    }

    #[test]
    fn test_year_stored_as_text_loads() {
        let book: Book =
            serde_json::from_str(r#"{"id":"1","titulo":"Dune","autor":"Herbert","anoPublicacao":"1966"}"#)
                .unwrap();
        assert_eq!(book.ano_publicacao, 1966);
    }

    #[test]
    fn test_loose_legacy_years_load() {
        let cases = [
            (r#""1815.5""#, 1815),
            ("1965.0", 1965),
            (r#""1e3""#, 1000),
            (r#"" 1966 ""#, 1966),
            (r#""""#, 0),
            (r#""soon""#, 0),
            ("null", 0),
            ("1e12", i32::MAX),
            ("-99999999999", i32::MIN),
        ];

        for (year, expected) in cases {
            let raw = format!(
                r#"{{"id":"1","titulo":"Emma","autor":"Austen","anoPublicacao":{}}}"#,
                year
            );
            let book: Book = serde_json::from_str(&raw).unwrap();
            assert_eq!(book.ano_publicacao, expected, "year {}", year);
        }
    }

    #[test]
    fn test_form_input_stays_strict() {
        let mut book = Book::empty();
        assert!(book.set_field(BookField::AnoPublicacao, "1815.5").is_err());
        assert!(book.set_field(BookField::AnoPublicacao, "1e3").is_err());
        assert_eq!(book.ano_publicacao, 0);
    }
}
