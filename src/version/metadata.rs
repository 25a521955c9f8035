//! maven-metadata.xml parser
//!
//! Extracts the versioning section of repository metadata:
//!
//! ```text
//! <metadata>
//!   <groupId>org.example</groupId>
//!   <artifactId>foo</artifactId>
//!   <versioning>
//!     <latest>1.1-SNAPSHOT</latest>
//!     <release>1.0</release>
//!     <versions>
//!       <version>0.9</version>
//!       <version>1.0</version>
//!     </versions>
//!   </versioning>
//! </metadata>
//! ```
//!
//! Only these elements are read. Comments are removed before matching. The
//! document is not validated beyond requiring a `<metadata>` root element.

use regex::Regex;

use crate::version::error::RegistryError;
use crate::version::types::ArtifactMetadata;

/// Parser for repository metadata documents
pub struct MetadataParser {
    comment_re: Regex,
    root_re: Regex,
    versioning_re: Regex,
    latest_re: Regex,
    release_re: Regex,
    versions_re: Regex,
    version_re: Regex,
}

impl MetadataParser {
    pub fn new() -> Self {
        Self {
            comment_re: Regex::new(r"(?s)<!--.*?-->").unwrap(),
            root_re: Regex::new(r"<metadata[\s>/]").unwrap(),
            versioning_re: Regex::new(r"(?s)<versioning>(.*?)</versioning>").unwrap(),
            latest_re: Regex::new(r"<latest>\s*([^<\s]+)\s*</latest>").unwrap(),
            release_re: Regex::new(r"<release>\s*([^<\s]+)\s*</release>").unwrap(),
            versions_re: Regex::new(r"(?s)<versions>(.*?)</versions>").unwrap(),
            version_re: Regex::new(r"<version>\s*([^<\s]+)\s*</version>").unwrap(),
        }
    }

    /// Parse a metadata document
    ///
    /// A document without a `<versioning>` section yields empty metadata.
    pub fn parse(&self, content: &str) -> Result<ArtifactMetadata, RegistryError> {
        let content = self.comment_re.replace_all(content, "");
        let content: &str = &content;

        if !self.root_re.is_match(content) {
            return Err(RegistryError::InvalidResponse(
                "missing <metadata> root element".to_string(),
            ));
        }

        let Some(versioning) = self
            .versioning_re
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return Ok(ArtifactMetadata::default());
        };

        let capture = |re: &Regex, text: &str| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        };

        let versions = self
            .versions_re
            .captures(versioning)
            .and_then(|caps| caps.get(1))
            .map(|block| {
                self.version_re
                    .captures_iter(block.as_str())
                    .filter_map(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(ArtifactMetadata::with_markers(
            versions,
            capture(&self.latest_re, versioning),
            capture(&self.release_re, versioning),
        ))
    }
}

impl Default for MetadataParser {
    fn default() -> Self {
        Self::new()
    }
}
