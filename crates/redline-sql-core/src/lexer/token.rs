//! Token types for the SQL lexer.

use core::fmt;

use serde::Serialize;

use super::Span;

/// Reserved words of the Redshift dialect.
///
/// Matching is case-insensitive. A reserved word immediately followed by `(`
/// is lexed as an identifier instead, so `LEFT(name, 3)` is a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Aes128,
    Aes256,
    All,
    Allowoverwrite,
    Analyse,
    Analyze,
    And,
    Any,
    Array,
    As,
    Asc,
    Avg,
    Authorization,
    Az64,
    Backup,
    Between,
    Binary,
    Blanksasnull,
    Both,
    By,
    Bytedict,
    Bzip2,
    Case,
    Cast,
    Check,
    Collate,
    Column,
    Count,
    Constraint,
    Create,
    Credentials,
    Cross,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    CurrentUserId,
    Default,
    Deferrable,
    Deflate,
    Defrag,
    Delta,
    Delta32k,
    Desc,
    Disable,
    Distinct,
    Do,
    Else,
    Emptyasnull,
    Enable,
    Encode,
    Encrypt,
    Encryption,
    End,
    Except,
    Explicit,
    False,
    For,
    Foreign,
    Freeze,
    From,
    Full,
    Globaldict256,
    Globaldict64k,
    Grant,
    Group,
    Gzip,
    Having,
    Identity,
    Ignore,
    Ilike,
    In,
    Initially,
    Inner,
    Intersect,
    Into,
    Is,
    Isnull,
    Join,
    Language,
    Leading,
    Left,
    Like,
    Limit,
    Localtime,
    Localtimestamp,
    Lun,
    Luns,
    Lzo,
    Lzop,
    Minus,
    Mostly13,
    Mostly32,
    Mostly8,
    Natural,
    New,
    Not,
    Notnull,
    Null,
    Nulls,
    Off,
    Offline,
    Offset,
    Oid,
    Old,
    On,
    Only,
    Open,
    Or,
    Order,
    Outer,
    Overlaps,
    Parallel,
    Partition,
    Percent,
    Permissions,
    Placing,
    Primary,
    Raw,
    Readratio,
    Recover,
    References,
    Respect,
    Rejectlog,
    Resort,
    Restore,
    Right,
    Select,
    SessionUser,
    Similar,
    Snapshot,
    Some,
    Sum,
    Sysdate,
    System,
    Table,
    Tag,
    Tdes,
    Text255,
    Text32k,
    Then,
    Timestamp,
    To,
    Top,
    Trailing,
    True,
    Truncatecolumns,
    Union,
    Unique,
    User,
    Using,
    Verbose,
    Wallet,
    When,
    Where,
    With,
    Without,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait, clippy::too_many_lines)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AES128" => Some(Self::Aes128),
            "AES256" => Some(Self::Aes256),
            "ALL" => Some(Self::All),
            "ALLOWOVERWRITE" => Some(Self::Allowoverwrite),
            "ANALYSE" => Some(Self::Analyse),
            "ANALYZE" => Some(Self::Analyze),
            "AND" => Some(Self::And),
            "ANY" => Some(Self::Any),
            "ARRAY" => Some(Self::Array),
            "AS" => Some(Self::As),
            "ASC" => Some(Self::Asc),
            "AVG" => Some(Self::Avg),
            "AUTHORIZATION" => Some(Self::Authorization),
            "AZ64" => Some(Self::Az64),
            "BACKUP" => Some(Self::Backup),
            "BETWEEN" => Some(Self::Between),
            "BINARY" => Some(Self::Binary),
            "BLANKSASNULL" => Some(Self::Blanksasnull),
            "BOTH" => Some(Self::Both),
            "BY" => Some(Self::By),
            "BYTEDICT" => Some(Self::Bytedict),
            "BZIP2" => Some(Self::Bzip2),
            "CASE" => Some(Self::Case),
            "CAST" => Some(Self::Cast),
            "CHECK" => Some(Self::Check),
            "COLLATE" => Some(Self::Collate),
            "COLUMN" => Some(Self::Column),
            "COUNT" => Some(Self::Count),
            "CONSTRAINT" => Some(Self::Constraint),
            "CREATE" => Some(Self::Create),
            "CREDENTIALS" => Some(Self::Credentials),
            "CROSS" => Some(Self::Cross),
            "CURRENT_DATE" => Some(Self::CurrentDate),
            "CURRENT_TIME" => Some(Self::CurrentTime),
            "CURRENT_TIMESTAMP" => Some(Self::CurrentTimestamp),
            "CURRENT_USER" => Some(Self::CurrentUser),
            "CURRENT_USER_ID" => Some(Self::CurrentUserId),
            "DEFAULT" => Some(Self::Default),
            "DEFERRABLE" => Some(Self::Deferrable),
            "DEFLATE" => Some(Self::Deflate),
            "DEFRAG" => Some(Self::Defrag),
            "DELTA" => Some(Self::Delta),
            "DELTA32K" => Some(Self::Delta32k),
            "DESC" => Some(Self::Desc),
            "DISABLE" => Some(Self::Disable),
            "DISTINCT" => Some(Self::Distinct),
            "DO" => Some(Self::Do),
            "ELSE" => Some(Self::Else),
            "EMPTYASNULL" => Some(Self::Emptyasnull),
            "ENABLE" => Some(Self::Enable),
            "ENCODE" => Some(Self::Encode),
            "ENCRYPT" => Some(Self::Encrypt),
            "ENCRYPTION" => Some(Self::Encryption),
            "END" => Some(Self::End),
            "EXCEPT" => Some(Self::Except),
            "EXPLICIT" => Some(Self::Explicit),
            "FALSE" => Some(Self::False),
            "FOR" => Some(Self::For),
            "FOREIGN" => Some(Self::Foreign),
            "FREEZE" => Some(Self::Freeze),
            "FROM" => Some(Self::From),
            "FULL" => Some(Self::Full),
            "GLOBALDICT256" => Some(Self::Globaldict256),
            "GLOBALDICT64K" => Some(Self::Globaldict64k),
            "GRANT" => Some(Self::Grant),
            "GROUP" => Some(Self::Group),
            "GZIP" => Some(Self::Gzip),
            "HAVING" => Some(Self::Having),
            "IDENTITY" => Some(Self::Identity),
            "IGNORE" => Some(Self::Ignore),
            "ILIKE" => Some(Self::Ilike),
            "IN" => Some(Self::In),
            "INITIALLY" => Some(Self::Initially),
            "INNER" => Some(Self::Inner),
            "INTERSECT" => Some(Self::Intersect),
            "INTO" => Some(Self::Into),
            "IS" => Some(Self::Is),
            "ISNULL" => Some(Self::Isnull),
            "JOIN" => Some(Self::Join),
            "LANGUAGE" => Some(Self::Language),
            "LEADING" => Some(Self::Leading),
            "LEFT" => Some(Self::Left),
            "LIKE" => Some(Self::Like),
            "LIMIT" => Some(Self::Limit),
            "LOCALTIME" => Some(Self::Localtime),
            "LOCALTIMESTAMP" => Some(Self::Localtimestamp),
            "LUN" => Some(Self::Lun),
            "LUNS" => Some(Self::Luns),
            "LZO" => Some(Self::Lzo),
            "LZOP" => Some(Self::Lzop),
            "MINUS" => Some(Self::Minus),
            "MOSTLY13" => Some(Self::Mostly13),
            "MOSTLY32" => Some(Self::Mostly32),
            "MOSTLY8" => Some(Self::Mostly8),
            "NATURAL" => Some(Self::Natural),
            "NEW" => Some(Self::New),
            "NOT" => Some(Self::Not),
            "NOTNULL" => Some(Self::Notnull),
            "NULL" => Some(Self::Null),
            "NULLS" => Some(Self::Nulls),
            "OFF" => Some(Self::Off),
            "OFFLINE" => Some(Self::Offline),
            "OFFSET" => Some(Self::Offset),
            "OID" => Some(Self::Oid),
            "OLD" => Some(Self::Old),
            "ON" => Some(Self::On),
            "ONLY" => Some(Self::Only),
            "OPEN" => Some(Self::Open),
            "OR" => Some(Self::Or),
            "ORDER" => Some(Self::Order),
            "OUTER" => Some(Self::Outer),
            "OVERLAPS" => Some(Self::Overlaps),
            "PARALLEL" => Some(Self::Parallel),
            "PARTITION" => Some(Self::Partition),
            "PERCENT" => Some(Self::Percent),
            "PERMISSIONS" => Some(Self::Permissions),
            "PLACING" => Some(Self::Placing),
            "PRIMARY" => Some(Self::Primary),
            "RAW" => Some(Self::Raw),
            "READRATIO" => Some(Self::Readratio),
            "RECOVER" => Some(Self::Recover),
            "REFERENCES" => Some(Self::References),
            "RESPECT" => Some(Self::Respect),
            "REJECTLOG" => Some(Self::Rejectlog),
            "RESORT" => Some(Self::Resort),
            "RESTORE" => Some(Self::Restore),
            "RIGHT" => Some(Self::Right),
            "SELECT" => Some(Self::Select),
            "SESSION_USER" => Some(Self::SessionUser),
            "SIMILAR" => Some(Self::Similar),
            "SNAPSHOT" => Some(Self::Snapshot),
            "SOME" => Some(Self::Some),
            "SUM" => Some(Self::Sum),
            "SYSDATE" => Some(Self::Sysdate),
            "SYSTEM" => Some(Self::System),
            "TABLE" => Some(Self::Table),
            "TAG" => Some(Self::Tag),
            "TDES" => Some(Self::Tdes),
            "TEXT255" => Some(Self::Text255),
            "TEXT32K" => Some(Self::Text32k),
            "THEN" => Some(Self::Then),
            "TIMESTAMP" => Some(Self::Timestamp),
            "TO" => Some(Self::To),
            "TOP" => Some(Self::Top),
            "TRAILING" => Some(Self::Trailing),
            "TRUE" => Some(Self::True),
            "TRUNCATECOLUMNS" => Some(Self::Truncatecolumns),
            "UNION" => Some(Self::Union),
            "UNIQUE" => Some(Self::Unique),
            "USER" => Some(Self::User),
            "USING" => Some(Self::Using),
            "VERBOSE" => Some(Self::Verbose),
            "WALLET" => Some(Self::Wallet),
            "WHEN" => Some(Self::When),
            "WHERE" => Some(Self::Where),
            "WITH" => Some(Self::With),
            "WITHOUT" => Some(Self::Without),
            _ => None,
        }
    }

    /// Returns the canonical (upper-case) spelling of the keyword.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aes128 => "AES128",
            Self::Aes256 => "AES256",
            Self::All => "ALL",
            Self::Allowoverwrite => "ALLOWOVERWRITE",
            Self::Analyse => "ANALYSE",
            Self::Analyze => "ANALYZE",
            Self::And => "AND",
            Self::Any => "ANY",
            Self::Array => "ARRAY",
            Self::As => "AS",
            Self::Asc => "ASC",
            Self::Avg => "AVG",
            Self::Authorization => "AUTHORIZATION",
            Self::Az64 => "AZ64",
            Self::Backup => "BACKUP",
            Self::Between => "BETWEEN",
            Self::Binary => "BINARY",
            Self::Blanksasnull => "BLANKSASNULL",
            Self::Both => "BOTH",
            Self::By => "BY",
            Self::Bytedict => "BYTEDICT",
            Self::Bzip2 => "BZIP2",
            Self::Case => "CASE",
            Self::Cast => "CAST",
            Self::Check => "CHECK",
            Self::Collate => "COLLATE",
            Self::Column => "COLUMN",
            Self::Count => "COUNT",
            Self::Constraint => "CONSTRAINT",
            Self::Create => "CREATE",
            Self::Credentials => "CREDENTIALS",
            Self::Cross => "CROSS",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Self::CurrentUser => "CURRENT_USER",
            Self::CurrentUserId => "CURRENT_USER_ID",
            Self::Default => "DEFAULT",
            Self::Deferrable => "DEFERRABLE",
            Self::Deflate => "DEFLATE",
            Self::Defrag => "DEFRAG",
            Self::Delta => "DELTA",
            Self::Delta32k => "DELTA32K",
            Self::Desc => "DESC",
            Self::Disable => "DISABLE",
            Self::Distinct => "DISTINCT",
            Self::Do => "DO",
            Self::Else => "ELSE",
            Self::Emptyasnull => "EMPTYASNULL",
            Self::Enable => "ENABLE",
            Self::Encode => "ENCODE",
            Self::Encrypt => "ENCRYPT",
            Self::Encryption => "ENCRYPTION",
            Self::End => "END",
            Self::Except => "EXCEPT",
            Self::Explicit => "EXPLICIT",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Foreign => "FOREIGN",
            Self::Freeze => "FREEZE",
            Self::From => "FROM",
            Self::Full => "FULL",
            Self::Globaldict256 => "GLOBALDICT256",
            Self::Globaldict64k => "GLOBALDICT64K",
            Self::Grant => "GRANT",
            Self::Group => "GROUP",
            Self::Gzip => "GZIP",
            Self::Having => "HAVING",
            Self::Identity => "IDENTITY",
            Self::Ignore => "IGNORE",
            Self::Ilike => "ILIKE",
            Self::In => "IN",
            Self::Initially => "INITIALLY",
            Self::Inner => "INNER",
            Self::Intersect => "INTERSECT",
            Self::Into => "INTO",
            Self::Is => "IS",
            Self::Isnull => "ISNULL",
            Self::Join => "JOIN",
            Self::Language => "LANGUAGE",
            Self::Leading => "LEADING",
            Self::Left => "LEFT",
            Self::Like => "LIKE",
            Self::Limit => "LIMIT",
            Self::Localtime => "LOCALTIME",
            Self::Localtimestamp => "LOCALTIMESTAMP",
            Self::Lun => "LUN",
            Self::Luns => "LUNS",
            Self::Lzo => "LZO",
            Self::Lzop => "LZOP",
            Self::Minus => "MINUS",
            Self::Mostly13 => "MOSTLY13",
            Self::Mostly32 => "MOSTLY32",
            Self::Mostly8 => "MOSTLY8",
            Self::Natural => "NATURAL",
            Self::New => "NEW",
            Self::Not => "NOT",
            Self::Notnull => "NOTNULL",
            Self::Null => "NULL",
            Self::Nulls => "NULLS",
            Self::Off => "OFF",
            Self::Offline => "OFFLINE",
            Self::Offset => "OFFSET",
            Self::Oid => "OID",
            Self::Old => "OLD",
            Self::On => "ON",
            Self::Only => "ONLY",
            Self::Open => "OPEN",
            Self::Or => "OR",
            Self::Order => "ORDER",
            Self::Outer => "OUTER",
            Self::Overlaps => "OVERLAPS",
            Self::Parallel => "PARALLEL",
            Self::Partition => "PARTITION",
            Self::Percent => "PERCENT",
            Self::Permissions => "PERMISSIONS",
            Self::Placing => "PLACING",
            Self::Primary => "PRIMARY",
            Self::Raw => "RAW",
            Self::Readratio => "READRATIO",
            Self::Recover => "RECOVER",
            Self::References => "REFERENCES",
            Self::Respect => "RESPECT",
            Self::Rejectlog => "REJECTLOG",
            Self::Resort => "RESORT",
            Self::Restore => "RESTORE",
            Self::Right => "RIGHT",
            Self::Select => "SELECT",
            Self::SessionUser => "SESSION_USER",
            Self::Similar => "SIMILAR",
            Self::Snapshot => "SNAPSHOT",
            Self::Some => "SOME",
            Self::Sum => "SUM",
            Self::Sysdate => "SYSDATE",
            Self::System => "SYSTEM",
            Self::Table => "TABLE",
            Self::Tag => "TAG",
            Self::Tdes => "TDES",
            Self::Text255 => "TEXT255",
            Self::Text32k => "TEXT32K",
            Self::Then => "THEN",
            Self::Timestamp => "TIMESTAMP",
            Self::To => "TO",
            Self::Top => "TOP",
            Self::Trailing => "TRAILING",
            Self::True => "TRUE",
            Self::Truncatecolumns => "TRUNCATECOLUMNS",
            Self::Union => "UNION",
            Self::Unique => "UNIQUE",
            Self::User => "USER",
            Self::Using => "USING",
            Self::Verbose => "VERBOSE",
            Self::Wallet => "WALLET",
            Self::When => "WHEN",
            Self::Where => "WHERE",
            Self::With => "WITH",
            Self::Without => "WITHOUT",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
///
/// Kinds carry no payload: the exact source text lives on [`Token::literal`]
/// so that nothing is lost between lexing and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Special
    /// End of input
    Eof,
    /// Character that cannot start any token, or an unterminated quote
    Illegal,

    // Trivia
    /// Run of whitespace
    Whitespace,
    /// `-- ...` or `/* ... */`
    Comment,

    // Literals and names
    /// Bare, quoted or dotted identifier (e.g. `s."t".c`)
    Identifier,
    /// Single-quoted string literal, quotes included
    String,
    /// Integer literal
    Integer,
    /// Reserved word
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// |
    Pipe,
    /// ||
    Concat,
    /// =
    Eq,
    /// !
    Bang,
    /// !=
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// <>
    LtGt,
    /// >
    Gt,
    /// >=
    GtEq,

    // Delimiters
    /// ,
    Comma,
    /// .
    Dot,
    /// :
    Colon,
    /// ::
    DoubleColon,
    /// (
    LeftParen,
    /// )
    RightParen,
}

impl TokenKind {
    /// Returns true for whitespace and comments.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }

    /// Returns true if this kind is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        *self == Self::Keyword(keyword)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Eof => "end of input",
            Self::Illegal => "illegal character",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::Identifier => "identifier",
            Self::String => "string literal",
            Self::Integer => "integer literal",
            Self::Keyword(kw) => return write!(f, "keyword {kw}"),
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Pipe => "'|'",
            Self::Concat => "'||'",
            Self::Eq => "'='",
            Self::Bang => "'!'",
            Self::NotEq => "'!='",
            Self::Lt => "'<'",
            Self::LtEq => "'<='",
            Self::LtGt => "'<>'",
            Self::Gt => "'>'",
            Self::GtEq => "'>='",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Colon => "':'",
            Self::DoubleColon => "'::'",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
        };
        f.write_str(text)
    }
}

/// A token borrowing its text from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub literal: &'a str,
    /// The location in the source code.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, literal: &'a str, span: Span) -> Self {
        Self {
            kind,
            literal,
            span,
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }
}
