//! Runner configuration, fixtures, page objects and helpers under the test directory

use std::fmt::Write;

use crate::core::Configuration;
use crate::templates::project::shell_quoted;

/// Quote a value as a single-quoted TypeScript string literal.
///
/// The result never spans more than one source line, so it is also safe to
/// place inside a `//` comment.
pub fn ts_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                let _ = write!(literal, "\\u{:04x}", c as u32);
            }
            c => literal.push(c),
        }
    }
    literal.push('\'');
    literal
}

pub fn playwright_config(test_dir: &str, config: &Configuration) -> String {
    let mut projects = String::new();
    for project in &config.browser_projects {
        // Writing to a String cannot fail
        let _ = write!(
            projects,
            "    {{\n      name: '{}',\n      use: {{ ...devices['{}'] }},\n    }},\n",
            project.canonical_name(),
            project.device_descriptor()
        );
    }

    format!(
        r#"import {{ defineConfig, devices }} from '@playwright/test';

/**
 * Playwright configuration generated by pw-scaffold.
 *
 * Run from the framework root:
 *   npx playwright test --config={config_path}
 */
export default defineConfig({{
  testDir: './specs',
  outputDir: '../test-results',
  fullyParallel: true,
  forbidOnly: !!process.env.CI,
  retries: {retries},
  workers: {workers},
  reporter: [['list'], ['html', {{ outputFolder: '../playwright-report', open: 'never' }}]],
  use: {{
    baseURL: {base_url},
    trace: 'on-first-retry',
    screenshot: 'only-on-failure',
    video: 'retain-on-failure',
  }},
  projects: [
{projects}  ],
}});
"#,
        config_path = shell_quoted(&format!("{test_dir}/playwright.config.ts")),
        retries = config.retries,
        workers = config.max_workers.as_config_literal(),
        base_url = ts_string_literal(&config.base_url),
    )
}

pub fn test_fixtures() -> String {
    r#"import { test as base, expect } from '@playwright/test';
import rawTestData from '../data/test-data.json';
import { HomePage } from '../pages/home-page';

export type TestData = Readonly<typeof rawTestData>;

// Built once per worker and handed to tests explicitly through the fixture.
const testData: TestData = Object.freeze(rawTestData);

type Fixtures = {
  testData: TestData;
  homePage: HomePage;
};

export const test = base.extend<Fixtures>({
  testData: async ({}, use) => {
    await use(testData);
  },
  homePage: async ({ page }, use) => {
    await use(new HomePage(page));
  },
});

export { expect };
"#
    .to_string()
}

pub fn base_page() -> String {
    r#"import { expect, type Locator, type Page } from '@playwright/test';

export abstract class BasePage {
  protected constructor(
    readonly page: Page,
    readonly path: string = '/',
  ) {}

  async open(): Promise<void> {
    await this.page.goto(this.path);
    await this.page.waitForLoadState('domcontentloaded');
  }

  async title(): Promise<string> {
    return this.page.title();
  }

  async expectVisible(locator: Locator): Promise<void> {
    await expect(locator).toBeVisible();
  }

  async expectUrlContains(fragment: string): Promise<void> {
    await expect(this.page).toHaveURL(new RegExp(fragment.replace(/[.*+?^${}()|[\]\\]/g, '\\$&')));
  }
}
"#
    .to_string()
}

pub fn home_page() -> String {
    r#"import { type Locator, type Page } from '@playwright/test';
import { BasePage } from './base-page';

export class HomePage extends BasePage {
  readonly heading: Locator;
  readonly mainNavigation: Locator;
  readonly links: Locator;

  constructor(page: Page) {
    super(page, '/');
    this.heading = page.locator('h1').first();
    this.mainNavigation = page.getByRole('navigation').first();
    this.links = page.getByRole('link');
  }

  async linkCount(): Promise<number> {
    return this.links.count();
  }

  async followLink(name: string): Promise<void> {
    await this.page.getByRole('link', { name }).first().click();
  }
}
"#
    .to_string()
}

pub fn helpers() -> String {
    r#"import { type Page } from '@playwright/test';

/** Random suffix for data that must be unique per run */
export function uniqueSuffix(): string {
  return `${Date.now().toString(36)}-${Math.random().toString(36).slice(2, 8)}`;
}

/** Resolves once the network has been idle, or after the timeout */
export async function settle(page: Page, timeout = 5_000): Promise<void> {
  try {
    await page.waitForLoadState('networkidle', { timeout });
  } catch {
    // Long-polling pages never go idle; carry on.
  }
}

/** Full-page screenshot attached under the given name */
export async function capture(page: Page, name: string): Promise<Buffer> {
  return page.screenshot({ fullPage: true, path: `test-results/screenshots/${name}.png` });
}
"#
    .to_string()
}
