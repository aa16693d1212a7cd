use dirdoc::{
    document_header, generate, walk, write_markdown, DocBuilder, Document, Header, OutputFormat,
};
use std::fs;
use tempfile::tempdir;
fn fixed_header(title: &str, targets: Option<Vec<String>>) -> Header {
    Header {
        title: title.to_string(),
        generated_on: "2024-01-01 00:00:00".to_string(),
        targets,
    }
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("main.ts"), "export {}").unwrap();
    fs::write(root.join("src/lib.rs"), "pub fn test() {}").unwrap();
    fs::write(root.join("src/view.jsx"), "<div />").unwrap();
    let out = tempdir().unwrap();
    let output = out.path().join("README.md");
    let options = DocBuilder::new(&root).output(&output).build();
    let result = generate(options).unwrap();
    assert_eq!(result.files.len(), 3);
    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.starts_with("# Documentation for: project\n\nGenerated on: "));
    assert!(doc.contains("## Directory Structure\n\n```\nproject/\n│   ├── main.ts\n├── src/\n"));
    assert!(doc.contains("## File Contents\n\n### main.ts\n\n```typescript\nexport {}\n```\n\n"));
    assert!(doc.contains("### src/lib.rs\n\n```rs\npub fn test() {}\n```\n\n"));
    assert!(doc.contains("### src/view.jsx\n\n```javascript\n<div />\n```\n\n"));
    let sections = doc.lines().filter(|l| l.starts_with("### ")).count();
    assert_eq!(sections, result.files.len());
}
#[test]
fn integration_markdown_layout() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes"), "plain").unwrap();
    let result = walk(&DocBuilder::new(&root).build()).unwrap();
    let mut buf = Vec::new();
    write_markdown(&mut buf, &fixed_header("Documentation for: project", None), &result).unwrap();
    let expected = "# Documentation for: project\n\n\
                    Generated on: 2024-01-01 00:00:00\n\n\
                    ## Directory Structure\n\n\
                    ```\n\
                    project/\n\
                    │   ├── notes\n\
                    ```\n\n\
                    ## File Contents\n\n\
                    ### notes\n\n\
                    ```\n\
                    plain\n\
                    ```\n\n";
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}
#[test]
fn integration_unreadable_file_is_isolated() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.py"), "print('a')").unwrap();
    fs::write(root.join("b.py"), "print('b')").unwrap();
    let result = walk(&DocBuilder::new(&root).build()).unwrap();
    fs::remove_file(root.join("a.py")).unwrap();
    let mut buf = Vec::new();
    write_markdown(&mut buf, &fixed_header("Documentation for: project", None), &result).unwrap();
    let doc = String::from_utf8(buf).unwrap();
    assert!(doc.contains("### a.py\n\n```py\nError reading file: "));
    assert!(doc.contains("### b.py\n\n```py\nprint('b')\n```\n\n"));
}
#[test]
fn integration_invalid_utf8_becomes_error_text() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("blob.bin"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    fs::write(root.join("readme.txt"), "hello").unwrap();
    let out = tempdir().unwrap();
    let output = out.path().join("DOCS.md");
    generate(DocBuilder::new(&root).output(&output).build()).unwrap();
    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("### blob.bin\n\n```bin\nError reading file: "));
    assert!(doc.contains("### readme.txt\n\n```txt\nhello\n```"));
}
#[test]
fn integration_selective_document() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(root.join("app/components")).unwrap();
    fs::create_dir_all(root.join("app/.next")).unwrap();
    fs::write(root.join("app/page.tsx"), "page").unwrap();
    fs::write(root.join("app/components/Button.tsx"), "button").unwrap();
    fs::write(root.join("app/.next/build.js"), "built").unwrap();
    fs::write(root.join("outside.txt"), "outside").unwrap();
    let out = tempdir().unwrap();
    let output = out.path().join("README.md");
    let options = DocBuilder::new(&root)
        .targets(["app", "lib"])
        .output(&output)
        .build();
    let result = generate(options).unwrap();
    assert_eq!(result.files.len(), 2);
    assert_eq!(result.missing, vec![root.join("lib")]);
    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.starts_with("# Documentation for Selected Directories\n\nGenerated on: "));
    assert!(doc.contains("## Documented Directories:\n- app\n- lib\n\n## Directory Structure\n\n```\napp/\n"));
    assert!(doc.contains(&format!("Warning: Path not found - {}\n", root.join("lib").display())));
    assert!(doc.contains("### app/components/Button.tsx\n\n```typescript\nbutton\n```"));
    assert!(doc.contains("### app/page.tsx\n\n```typescript\npage\n```"));
    assert!(!doc.contains(".next"));
    assert!(!doc.contains("outside.txt"));
    let button = doc.find("### app/components/Button.tsx").unwrap();
    let page = doc.find("### app/page.tsx").unwrap();
    assert!(button < page);
}
#[test]
fn integration_output_inside_tree_is_skipped() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("README.md"), "stale").unwrap();
    fs::write(root.join("main.rs"), "fn main() {}").unwrap();
    let output = root.join("README.md");
    let result = generate(DocBuilder::new(&root).output(&output).build()).unwrap();
    assert_eq!(result.files, vec![root.join("main.rs")]);
    let doc = fs::read_to_string(&output).unwrap();
    assert!(!doc.contains("stale"));
    assert!(doc.contains("### main.rs"));
}
#[test]
fn integration_json_output() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/index.ts"), "export const x = 1;").unwrap();
    fs::write(root.join("package.json"), "{}").unwrap();
    let out = tempdir().unwrap();
    let output = out.path().join("docs.json");
    let options = DocBuilder::new(&root)
        .output(&output)
        .format(OutputFormat::Json)
        .build();
    let result = generate(options).unwrap();
    let document: Document =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(document.header.title, "Documentation for: project");
    assert_eq!(document.header.targets, None);
    assert_eq!(document.tree, result.tree);
    assert_eq!(document.sections.len(), 2);
    assert_eq!(document.sections[0].path, "package.json");
    assert_eq!(document.sections[0].language, "json");
    assert_eq!(document.sections[1].path, "src/index.ts");
    assert_eq!(document.sections[1].language, "typescript");
    assert_eq!(document.sections[1].content, "export const x = 1;");
}
#[test]
fn integration_header_titles() {
    let dir = tempdir().unwrap();
    let whole = DocBuilder::new(dir.path()).build();
    let header = document_header(&whole, &dir.path().join("project"));
    assert_eq!(header.title, "Documentation for: project");
    assert_eq!(header.generated_on.len(), "2024-01-01 00:00:00".len());
    let selective = DocBuilder::new(dir.path()).targets(["a", "b"]).build();
    let header = document_header(&selective, dir.path());
    assert_eq!(header.title, "Documentation for Selected Directories");
    assert_eq!(header.targets, Some(vec!["a".to_string(), "b".to_string()]));
}
#[test]
fn integration_unwritable_output_fails() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    fs::create_dir(&root).unwrap();
    let output = dir.path().join("no/such/dir/README.md");
    assert!(generate(DocBuilder::new(&root).output(output).build()).is_err());
}
#[test]
fn integration_output_truncated_before_walk() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("README.md");
    fs::write(&output, "previous run").unwrap();
    let options = DocBuilder::new(dir.path().join("missing"))
        .output(&output)
        .build();
    assert!(generate(options).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}
