use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const App = () => <div className="top-[-1px] -mt-2 m-[2px]" />;"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_negative_arbitrary_value() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const App = () => (
  <div className="flex -top-[1px]" />
);
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_file_then_line_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/b.tsx",
        r#"export const B = () => <div className="-z-[1]" />;"#,
    )?;
    test.write_file(
        "src/a.tsx",
        r#"import clsx from "clsx";
export const A = () => <div className={clsx("-left-[2px]", "-m-[3px]")} />;
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_variant_prefixes() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const App = () => <div className="md:hover:-translate-x-[50%] dark:-mt-[4px]" />;"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_unknown_callee_ignored() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", r#"export const cls = cn("-top-[1px]");"#)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_callee_flag() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const a = cn("-top-[1px]");
export const b = clsx("-left-[1px]");
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().args(["--callee", "cn"]));

    Ok(())
}

#[test]
fn test_optional_call() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const a = clsx?.("-top-[1px]");"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_tags_from_config() -> Result<()> {
    let test = CliTest::with_file(
        "src/styles.ts",
        "export const box = tw`flex -inset-[3px]`;\nexport const other = css`-top-[1px]`;\n",
    )?;
    test.write_file(".twcheckrc.json", r#"{ "tags": ["tw"] }"#)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_separator_from_inline_config() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const App = () => <div className="md_-top-[1px]" />;"#,
    )?;
    test.write_file(".twcheckrc.json", r#"{ "config": { "separator": "_" } }"#)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_separator_from_tailwind_config_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const App = () => <div className="md__-top-[1px]" />;"#,
    )?;
    test.write_file(
        "tailwind.config.js",
        "module.exports = {\n  separator: '__',\n  content: ['./src/**/*.tsx'],\n};\n",
    )?;
    test.write_file(".twcheckrc.json", r#"{ "config": "tailwind.config.js" }"#)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_separator_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const App = () => <div className="md_-top-[1px]" />;"#,
    )?;
    test.write_file(".twcheckrc.json", r#"{ "config": { "separator": "__" } }"#)?;

    assert_cmd_snapshot!(test.check_command().args(["--separator", "_"]));

    Ok(())
}

#[test]
fn test_skip_class_attribute() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"import clsx from "clsx";
export const App = () => <div className="-top-[1px]"><span className={clsx("-left-[1px]")} /></div>;
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("--skip-class-attribute"));

    Ok(())
}

#[test]
fn test_directives() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"// twcheck-disable-next-line
export const a = clsx("-top-[1px]");
/* twcheck-disable */
export const b = clsx("-left-[1px]");
/* twcheck-enable */
export const c = clsx("-right-[1px]");
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_ignores_and_test_files() -> Result<()> {
    let test = CliTest::new()?;
    let bad = r#"export const App = () => <div className="-top-[1px]" />;"#;
    test.write_file("src/app.test.tsx", bad)?;
    test.write_file("legacy/old.tsx", bad)?;
    test.write_file("node_modules/pkg/index.js", r#"clsx("-top-[1px]");"#)?;
    test.write_file(
        ".twcheckrc.json",
        r#"{ "ignores": ["legacy", "**/node_modules/**"], "ignoreTestFiles": true }"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_source_root() -> Result<()> {
    let test = CliTest::with_file(
        "web/src/app.tsx",
        r#"export const App = () => <div className="-top-[1px]" />;"#,
    )?;

    assert_cmd_snapshot!(test.check_command().args(["--source-root", "web"]));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "export const = ;")?;

    insta::with_settings!({
        filters => vec![(r"Failed to parse ([^:]+): .*  parse-error", "Failed to parse $1: [SYNTAX ERROR]  parse-error")]
    }, {
        assert_cmd_snapshot!(test.check_command());
    });

    Ok(())
}

#[test]
fn test_empty_separator_in_config() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const a = 1;")?;
    test.write_file(".twcheckrc.json", r#"{ "config": { "separator": "" } }"#)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_missing_tailwind_config() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const a = 1;")?;
    test.write_file(".twcheckrc.json", r#"{ "config": "tailwind.config.js" }"#)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}
