//! Files written at the framework root

use serde_json::json;

/// Version range of `@playwright/test` pinned in the generated package
pub const PLAYWRIGHT_VERSION: &str = "^1.48.0";

/// Double-quote a path for an npm script, which runs through `sh`
pub fn shell_quoted(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('"');
    for c in path.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

pub fn package_json(test_dir: &str) -> String {
    let config = shell_quoted(&format!("{test_dir}/playwright.config.ts"));
    let package = json!({
        "name": "playwright-framework",
        "version": "1.0.0",
        "private": true,
        "description": "End-to-end tests powered by Playwright",
        "scripts": {
            "test": format!("playwright test --config={config}"),
            "test:headed": format!("playwright test --config={config} --headed"),
            "test:debug": format!("playwright test --config={config} --debug"),
            "test:ui": format!("playwright test --config={config} --ui"),
            "report": "playwright show-report",
            "install:browsers": "playwright install"
        },
        "devDependencies": {
            "@playwright/test": PLAYWRIGHT_VERSION,
            "@types/node": "^20.11.0",
            "typescript": "^5.4.0"
        }
    });
    format!("{package:#}")
}

pub fn gitignore() -> String {
    r#"node_modules/
/test-results/
/playwright-report/
/blob-report/
/playwright/.cache/
.env
*.log
.DS_Store
"#
    .to_string()
}

pub fn tsconfig(test_dir: &str) -> String {
    let tsconfig = json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "commonjs",
            "moduleResolution": "node",
            "strict": true,
            "esModuleInterop": true,
            "resolveJsonModule": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "baseUrl": ".",
            "paths": {
                "@fixtures/*": [format!("{test_dir}/fixtures/*")],
                "@pages/*": [format!("{test_dir}/pages/*")],
                "@utils/*": [format!("{test_dir}/utils/*")],
                "@data/*": [format!("{test_dir}/data/*")]
            }
        },
        "include": [format!("{test_dir}/**/*.ts")]
    });
    format!("{tsconfig:#}")
}

/// Summary document. Markers are replaced by `substitute_placeholders`.
pub const README: &str = r#"# Playwright Test Framework

End-to-end test suite scaffolded with pw-scaffold.

## Configuration

| Setting | Value |
|---------|-------|
| Test directory | `{{TEST_DIR}}` |
| Base URL | {{BASE_URL}} |
| Workers | {{WORKERS}} |
| Retries | {{RETRIES}} |
| Browsers | {{BROWSERS}} |

## Layout

```
{{TEST_DIR}}/
├── playwright.config.ts   # Runner configuration
├── fixtures/              # Custom test fixtures
├── pages/                 # Page objects
├── utils/                 # Shared helpers
├── data/                  # Static test data
└── specs/                 # Test files
```

## Running

```bash
npm install
npx playwright install
npm test
```

Other scripts:

- `npm run test:headed` runs with a visible browser
- `npm run test:debug` opens the Playwright inspector
- `npm run test:ui` starts UI mode
- `npm run report` opens the last HTML report

Settings live in `{{TEST_DIR}}/playwright.config.ts`; re-running the
scaffolder overwrites every generated file.
"#;
