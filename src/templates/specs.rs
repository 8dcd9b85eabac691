//! Example test files

use crate::core::Configuration;
use crate::templates::framework::ts_string_literal;

pub fn home_spec() -> String {
    r#"import { test, expect } from '../fixtures/test-fixtures';

test.describe('Home page', () => {
  test.beforeEach(async ({ homePage }) => {
    await homePage.open();
  });

  test('has a title', async ({ homePage }) => {
    expect(await homePage.title()).not.toHaveLength(0);
  });

  test('shows a main heading', async ({ homePage }) => {
    await homePage.expectVisible(homePage.heading);
  });

  test('exposes navigation links', async ({ homePage }) => {
    expect(await homePage.linkCount()).toBeGreaterThan(0);
  });
});
"#
    .to_string()
}

pub fn navigation_spec() -> String {
    r#"import { test, expect } from '../fixtures/test-fixtures';
import { settle } from '../utils/helpers';

test.describe('Navigation', () => {
  test('starts at the configured base URL', async ({ page, testData }) => {
    await page.goto(testData.endpoints.home);
    await settle(page);
    expect(page.url().startsWith(testData.baseUrl)).toBeTruthy();
  });

  test('can go back after following a link', async ({ page, homePage }) => {
    await homePage.open();
    const start = page.url();
    const first = homePage.links.first();
    if ((await first.getAttribute('href'))?.startsWith('http')) {
      test.skip(true, 'First link leaves the site');
    }
    await first.click();
    await settle(page);
    await page.goBack();
    await expect(page).toHaveURL(start);
  });
});
"#
    .to_string()
}

pub fn api_spec(_test_dir: &str, config: &Configuration) -> String {
    format!(
        r#"import {{ test, expect }} from '../fixtures/test-fixtures';

// Requests resolve against {base_url}
test.describe('HTTP smoke checks', () => {{
  test('home endpoint responds', async ({{ request, testData }}) => {{
    const response = await request.get(testData.endpoints.health);
    expect(response.status()).toBeLessThan(500);
  }});

  test('serves HTML', async ({{ request, testData }}) => {{
    const response = await request.get(testData.endpoints.home);
    expect(response.headers()['content-type'] ?? '').toContain('text/html');
  }});
}});
"#,
        base_url = ts_string_literal(&config.base_url)
    )
}
