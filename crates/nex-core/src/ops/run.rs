//! Running a package command.
//!
//! The final invocation is a single shell line,
//! `cd "<install_path>" && <template> <args...>`, so manifest templates may
//! use pipes and `&&` the same way on every host.

use crate::ops::{install, is_installed, resolve};
use crate::probe::{self, RuntimeProbe};
use crate::{Context, NexError, Result, process};
use nex_schema::{DEFAULT_COMMAND, Manifest, PackageId, Runtime};
use std::path::{Path, PathBuf};

/// Manifest file names looked up inside an install tree, in order.
pub const LOCAL_MANIFESTS: [&str; 2] = ["manifest.json", "nex.json"];

/// A fully prepared command, ready to hand to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Package being run.
    pub id: PackageId,
    /// Its working tree.
    pub install_path: PathBuf,
    /// Command template after launcher synthesis and the python fallback.
    pub template: String,
    /// Shell line that will be executed.
    pub script: String,
}

/// Split the tokens following the package name into a command name and
/// its arguments.
///
/// The first token names the command unless it starts with `-`, in which
/// case the `default` command runs and every token is an argument.
pub fn split_command_args(rest: &[String]) -> (String, Vec<String>) {
    match rest.split_first() {
        Some((first, tail)) if !first.starts_with('-') => (first.clone(), tail.to_vec()),
        _ => (DEFAULT_COMMAND.to_string(), rest.to_vec()),
    }
}

/// Read `manifest.json` (or `nex.json`) from an install tree.
///
/// # Errors
///
/// Returns [`NexError::Parse`] if neither file exists or the one found is
/// invalid.
pub fn load_local_manifest(dir: &Path) -> Result<Manifest> {
    for name in LOCAL_MANIFESTS {
        let path = dir.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => {
                return Manifest::from_slice(&bytes)
                    .map_err(|e| NexError::Parse(format!("{}: {e}", path.display())));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(NexError::io("Failed to read manifest", &path, e)),
        }
    }
    Err(NexError::Parse(format!(
        "No manifest.json or nex.json in {}",
        dir.display()
    )))
}

/// Command template for `command`, synthesising one for `default` from the
/// entrypoint when the manifest does not declare it.
///
/// # Errors
///
/// Returns [`NexError::NoSuchCommand`] when nothing applies.
pub fn select_template(manifest: &Manifest, command: &str) -> Result<String> {
    if let Some(template) = manifest.command(command) {
        return Ok(template.to_string());
    }
    let entrypoint = manifest.entrypoint.trim();
    if command == DEFAULT_COMMAND && !entrypoint.is_empty() {
        return Ok(default_launcher(manifest.runtime.kind, entrypoint));
    }
    Err(NexError::NoSuchCommand {
        id: manifest.id.clone(),
        command: command.to_string(),
    })
}

/// Launch line for `entrypoint` under `runtime`.
pub fn default_launcher(runtime: Runtime, entrypoint: &str) -> String {
    match runtime {
        Runtime::Python => format!("python \"{entrypoint}\""),
        Runtime::Node => format!("node \"{entrypoint}\""),
        Runtime::PowerShell => format!("powershell -File \"{entrypoint}\""),
        Runtime::Bash => format!("bash \"{entrypoint}\""),
        Runtime::Go => format!("go run \"{entrypoint}\""),
        Runtime::Binary | Runtime::Unknown => {
            if Path::new(entrypoint).is_relative() && !entrypoint.starts_with('.') {
                format!("\"./{entrypoint}\"")
            } else {
                format!("\"{entrypoint}\"")
            }
        }
    }
}

/// Rewrite every `python` token in command position to `python3`.
///
/// Command position is the start of the template or right after `&`,
/// ignoring whitespace; text inside single or double quotes is never
/// touched. Returns `None` when nothing was rewritten.
pub fn rewrite_python(template: &str) -> Option<String> {
    const TOKEN: &str = "python";

    let mut out = String::with_capacity(template.len() + 1);
    let mut quote: Option<char> = None;
    let mut command_position = true;
    let mut changed = false;
    let mut chars = template.char_indices();

    while let Some((i, c)) = chars.next() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            out.push(c);
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                command_position = false;
            }
            '&' => command_position = true,
            c if c.is_whitespace() => {}
            _ if command_position => {
                command_position = false;
                let ends_token = template[i..].strip_prefix(TOKEN).is_some_and(|after| {
                    after
                        .chars()
                        .next()
                        .is_none_or(|n| n.is_whitespace() || n == '&')
                });
                if ends_token {
                    out.push_str("python3");
                    // `c` was the first byte of the token; skip the rest.
                    chars.nth(TOKEN.len() - 2);
                    changed = true;
                    continue;
                }
            }
            _ => {}
        }
        out.push(c);
    }

    changed.then_some(out)
}

/// Apply the POSIX python fallback: when `python` is absent but `python3`
/// is on `PATH`, rewrite command-position `python` tokens.
pub fn python_fallback(template: &str, probe: &dyn RuntimeProbe) -> String {
    if cfg!(windows) || probe.has("python") || !probe.has("python3") {
        return template.to_string();
    }
    match rewrite_python(template) {
        Some(rewritten) => {
            tracing::debug!("python not found, using python3: {rewritten}");
            rewritten
        }
        None => template.to_string(),
    }
}

/// Quote an argument for the shell line: arguments containing a space are
/// wrapped in double quotes, all others pass through verbatim.
pub fn quote_arg(arg: &str) -> String {
    if arg.contains(' ') {
        format!("\"{arg}\"")
    } else {
        arg.to_string()
    }
}

/// `cd "<install_path>" && <template> <args...>`
pub fn build_script(install_path: &Path, template: &str, args: &[String]) -> String {
    let cd = if cfg!(windows) { "cd /d" } else { "cd" };
    let mut script = format!("{cd} \"{}\" && {template}", install_path.display());
    for arg in args {
        script.push(' ');
        script.push_str(&quote_arg(arg));
    }
    script
}

/// Resolve, auto-install, and build the shell line for `command`.
///
/// # Errors
///
/// Resolver and installer errors, [`NexError::RuntimeMissing`] when the
/// declared runtime is not on `PATH`, or [`NexError::NoSuchCommand`].
pub async fn prepare(
    ctx: &Context,
    name_or_id: &str,
    command: &str,
    args: &[String],
) -> Result<Invocation> {
    let id = resolve(ctx, name_or_id).await?;

    if !is_installed(&ctx.paths, &id) {
        ctx.reporter
            .info(&format!("Package {id} is not installed. Installing..."));
        install(ctx, &id).await?;
    }

    let install_path = ctx.paths.package_dir(&id);
    let manifest = load_local_manifest(&install_path)?;

    let runtime = manifest.runtime.kind;
    if runtime.needs_probe() && probe::detect(ctx.probe.as_ref(), runtime).is_none() {
        return Err(NexError::RuntimeMissing {
            runtime,
            instructions: probe::install_instructions(runtime),
        });
    }

    let template = select_template(&manifest, command)?;
    let template = python_fallback(&template, ctx.probe.as_ref());
    let script = build_script(&install_path, &template, args);

    Ok(Invocation {
        id,
        install_path,
        template,
        script,
    })
}

/// Run `command` of the package and return its exit code.
///
/// # Errors
///
/// See [`prepare`]; spawning the shell may also fail with
/// [`NexError::Io`].
pub async fn execute(
    ctx: &Context,
    name_or_id: &str,
    command: &str,
    args: &[String],
) -> Result<i32> {
    let invocation = prepare(ctx, name_or_id, command, args).await?;
    tracing::debug!("Running {} {command}", invocation.id);
    process::run_shell(&invocation.script, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestEnv;
    use crate::ops::install::tests::{HELLO_MANIFEST, registry_with};
    use crate::probe::testing::FakeProbe;
    use mockito::{Matcher, Server};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_split_command_args() {
        assert_eq!(split_command_args(&[]), ("default".to_string(), vec![]));
        assert_eq!(
            split_command_args(&strings(&["build", "--release"])),
            ("build".to_string(), strings(&["--release"]))
        );
        assert_eq!(
            split_command_args(&strings(&["--help", "x"])),
            ("default".to_string(), strings(&["--help", "x"]))
        );
    }

    #[test]
    fn test_rewrite_python_command_position_only() {
        assert_eq!(
            rewrite_python("python app.py").as_deref(),
            Some("python3 app.py")
        );
        assert_eq!(
            rewrite_python("  python -m pip install . && python app.py").as_deref(),
            Some("  python3 -m pip install . && python3 app.py")
        );
        assert_eq!(rewrite_python("echo python"), None);
        assert_eq!(rewrite_python("python3 app.py"), None);
        assert_eq!(rewrite_python("pythonw app.py"), None);
        assert_eq!(rewrite_python("\"python\" app.py"), None);
        assert_eq!(
            rewrite_python("python -c 'x && python y'").as_deref(),
            Some("python3 -c 'x && python y'")
        );
    }

    #[test]
    fn test_python_fallback_needs_python3() {
        let only3 = FakeProbe::with(&["python3"]);
        let both = FakeProbe::with(&["python", "python3"]);
        let none = FakeProbe::default();
        let expected = if cfg!(windows) {
            "python a.py"
        } else {
            "python3 a.py"
        };
        assert_eq!(python_fallback("python a.py", &only3), expected);
        assert_eq!(python_fallback("python a.py", &both), "python a.py");
        assert_eq!(python_fallback("python a.py", &none), "python a.py");
    }

    #[test]
    fn test_default_launchers() {
        assert_eq!(default_launcher(Runtime::Node, "index.js"), "node \"index.js\"");
        assert_eq!(
            default_launcher(Runtime::PowerShell, "run.ps1"),
            "powershell -File \"run.ps1\""
        );
        assert_eq!(default_launcher(Runtime::Go, "main.go"), "go run \"main.go\"");
        assert_eq!(default_launcher(Runtime::Binary, "bin/tool"), "\"./bin/tool\"");
        assert_eq!(default_launcher(Runtime::Binary, "./tool"), "\"./tool\"");
    }

    #[test]
    fn test_select_template() {
        let manifest = Manifest::from_slice(
            br#"{"id":"a.b","version":"1","repository":"r","entrypoint":"main.py",
                 "runtime":{"type":"python"},"commands":{"lint":"ruff ."}}"#,
        )
        .unwrap();
        assert_eq!(select_template(&manifest, "lint").unwrap(), "ruff .");
        assert_eq!(
            select_template(&manifest, "default").unwrap(),
            "python \"main.py\""
        );
        assert!(matches!(
            select_template(&manifest, "deploy"),
            Err(NexError::NoSuchCommand { command, .. }) if command == "deploy"
        ));
    }

    #[test]
    fn test_build_script_quotes_spaced_args() {
        let script = build_script(Path::new("/p"), "tool", &strings(&["a b", "c"]));
        let cd = if cfg!(windows) { "cd /d" } else { "cd" };
        assert_eq!(script, format!("{cd} \"/p\" && tool \"a b\" c"));
    }

    #[test]
    fn test_load_local_manifest_falls_back_to_nex_json() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_local_manifest(tmp.path()),
            Err(NexError::Parse(_))
        ));
        std::fs::write(
            tmp.path().join("nex.json"),
            br#"{"id":"a.b","version":"2","repository":"r"}"#,
        )
        .unwrap();
        assert_eq!(load_local_manifest(tmp.path()).unwrap().version, "2");
    }

    #[cfg(not(windows))]
    #[tokio::test]
    async fn test_run_auto_installs_and_falls_back_to_python3() {
        let (server, _, manifest_mock) = registry_with(HELLO_MANIFEST).await;
        let env = TestEnv::new(&server.url(), &["python3"]);

        let invocation = prepare(&env.ctx, "hello", "default", &[]).await.unwrap();
        manifest_mock.assert_async().await;
        assert!(is_installed(&env.ctx.paths, &invocation.id));
        assert_eq!(invocation.template, "python3 hello.py");
    }

    #[tokio::test]
    async fn test_missing_runtime_fails_before_spawning() {
        let (server, _, _) = registry_with(HELLO_MANIFEST).await;
        let env = TestEnv::new(&server.url(), &[]);

        let err = execute(&env.ctx, "alice.hello", "default", &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NexError::RuntimeMissing { runtime: Runtime::Python, .. }
        ));
        assert!(err.to_string().contains("python.org"));
    }

    #[tokio::test]
    async fn test_ambiguous_name_attempts_nothing() {
        let mut server = Server::new_async().await;
        let _index = server
            .mock("GET", "/index.json")
            .with_body(r#"{"packages":[{"id":"alice.tool"},{"id":"bob.tool"}]}"#)
            .create_async()
            .await;
        let manifests = server
            .mock("GET", Matcher::Regex("^/packages/".to_string()))
            .expect(0)
            .create_async()
            .await;
        let env = TestEnv::new(&server.url(), &[]);

        assert!(matches!(
            execute(&env.ctx, "tool", "default", &[]).await,
            Err(NexError::Ambiguous { .. })
        ));
        manifests.assert_async().await;
        assert_eq!(env.cloner.call_count(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_arguments_reach_the_child_intact() {
        let manifest = r#"{
            "id": "alice.hello",
            "version": "1.0.0",
            "repository": "https://git.example/alice/hello.git",
            "runtime": {"type": "binary"},
            "commands": {"echo": "sh args.sh"}
        }"#;
        let (server, _, _) = registry_with(manifest).await;
        let env = TestEnv::new(&server.url(), &[]);
        let id = PackageId::parse("alice.hello").unwrap();
        install(&env.ctx, &id).await.unwrap();

        let dir = env.ctx.paths.package_dir(&id);
        std::fs::write(
            dir.join("args.sh"),
            "for a in \"$@\"; do printf '%s\\n' \"$a\"; done > args.txt\n",
        )
        .unwrap();

        let code = execute(&env.ctx, "alice.hello", "echo", &strings(&["a b", "c"]))
            .await
            .unwrap();
        assert_eq!(code, 0);
        let lines = std::fs::read_to_string(dir.join("args.txt")).unwrap();
        assert_eq!(lines, "a b\nc\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_code_is_returned() {
        let manifest = r#"{
            "id": "alice.hello",
            "version": "1.0.0",
            "repository": "https://git.example/alice/hello.git",
            "commands": {"default": "exit 3"}
        }"#;
        let (server, _, _) = registry_with(manifest).await;
        let env = TestEnv::new(&server.url(), &[]);

        assert_eq!(execute(&env.ctx, "alice.hello", "default", &[]).await.unwrap(), 3);
    }
}
