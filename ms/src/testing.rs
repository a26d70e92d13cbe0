//! Shared fixtures for unit tests

use std::fs;
use std::sync::Arc;

use promptcatalog::PromptCatalog;
use tempfile::TempDir;

const BUBBLE_SORT: &str = "---
name: bubble-sort
languages: [python, javascript]
description: Explain bubble sort
version: \"1.0\"
category: algorithms
---
Explain bubble sort step by step.
";

const CODE_REVIEW: &str = "---
name: code-review
languages: [javascript, rust]
description: Review code
version: \"1.0\"
arguments:
  - name: language
    description: Language of the code
    required: true
---
Review this {{language}} code for bugs.
";

const QUICKSORT: &str = "---
name: quicksort
languages: [go]
description: Explain quicksort
version: \"1.0\"
category: algorithms
---
Explain quicksort with Go slices.
";

/// A loaded catalog of three prompts; keep the `TempDir` alive while testing
pub async fn sample_catalog() -> (TempDir, Arc<PromptCatalog>) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bubble-sort.txt"), BUBBLE_SORT).unwrap();
    fs::write(temp.path().join("code-review.txt"), CODE_REVIEW).unwrap();
    fs::write(temp.path().join("quicksort.txt"), QUICKSORT).unwrap();

    let catalog = PromptCatalog::load(temp.path()).await;
    assert_eq!(catalog.len(), 3);
    (temp, Arc::new(catalog))
}
