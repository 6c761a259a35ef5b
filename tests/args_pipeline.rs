//! Integration tests for the argument resolution pipeline.

mod common;

use common::{raw_args, resolve_args};
use protoc_compat::args::{resolve, ArgsError, UnsupportedFlag};
use protoc_compat::config::{Defaults, ErrorFormat};

// =============================================================================
// OPTIONS & DEFAULTS
// =============================================================================

#[test]
fn defaults_fill_unset_options() {
    let env = resolve_args(&raw_args(&["a.proto"])).unwrap();
    assert_eq!(env.include_dir_paths, vec!["."]);
    assert_eq!(env.error_format, ErrorFormat::Text);
    assert_eq!(env.output, None);
    assert!(!env.include_imports);
    assert!(env.plugins.is_empty());
}

#[test]
fn configured_defaults_are_used() {
    let defaults = Defaults {
        include_paths: vec!["proto".into(), "third_party".into()],
        error_format: "json".into(),
    };
    let env = resolve(&raw_args(&["a.proto"]), &defaults).unwrap();
    assert_eq!(env.include_dir_paths, vec!["proto", "third_party"]);
    assert_eq!(env.error_format, ErrorFormat::Json);
}

#[test]
fn explicit_options_override_defaults() {
    let env = resolve_args(&raw_args(&[
        "-Iproto",
        "--proto_path=vendor,third_party",
        "--include_imports",
        "--include_source_info",
        "--print_free_field_numbers",
        "-o",
        "out.bin",
        "--error_format=msvs",
        "a.proto",
    ]))
    .unwrap();
    assert_eq!(env.include_dir_paths, vec!["proto", "vendor", "third_party"]);
    assert!(env.include_imports);
    assert!(env.include_source_info);
    assert!(env.print_free_field_numbers);
    assert_eq!(env.output.as_deref(), Some("out.bin"));
    assert_eq!(env.error_format, ErrorFormat::Msvs);
}

#[test]
fn invalid_error_format() {
    let err = resolve_args(&raw_args(&["--error_format=yaml", "a.proto"])).unwrap_err();
    assert!(matches!(err, ArgsError::InvalidErrorFormat { ref value } if value == "yaml"));
}

// =============================================================================
// INPUT FILES
// =============================================================================

#[test]
fn input_order_matches_positional_order() {
    let env = resolve_args(&raw_args(&[
        "z.proto",
        "--include_imports",
        "a.proto",
        "-I",
        "inc",
        "m.proto",
        "a.proto",
    ]))
    .unwrap();
    assert_eq!(env.file_paths, vec!["z.proto", "a.proto", "m.proto", "a.proto"]);
}

#[test]
fn no_input_files() {
    let err = resolve_args(&raw_args(&["-I.", "--go_out=gen"])).unwrap_err();
    assert!(matches!(err, ArgsError::NoInputFiles));
    assert_eq!(err.to_string(), "no input files specified");
}

#[test]
fn empty_argument() {
    let err = resolve_args(&raw_args(&["a.proto", ""])).unwrap_err();
    assert!(matches!(err, ArgsError::EmptyArgument));
}

// =============================================================================
// PLUGIN DIRECTIVES
// =============================================================================

#[test]
fn combined_out_equals_separate_opt_and_out() {
    let combined = resolve_args(&raw_args(&["--foo_out=myopt:out/dir", "a.proto"])).unwrap();
    let separate =
        resolve_args(&raw_args(&["--foo_opt=myopt", "--foo_out=out/dir", "a.proto"])).unwrap();
    assert_eq!(combined.plugins, separate.plugins);
    assert_eq!(combined.plugins["foo"].out, "out/dir");
    assert_eq!(combined.plugins["foo"].opt.as_deref(), Some("myopt"));
}

#[test]
fn combined_and_separate_opt_together_conflict() {
    let err = resolve_args(&raw_args(&[
        "--foo_out=myopt:out/dir",
        "--foo_opt=myopt",
        "a.proto",
    ]))
    .unwrap_err();
    assert!(matches!(err, ArgsError::DuplicateOptions { ref plugin } if plugin == "foo"));
}

#[test]
fn two_colons_are_ambiguous() {
    let err = resolve_args(&raw_args(&["--foo_out=a:b:c", "a.proto"])).unwrap_err();
    assert!(matches!(
        err,
        ArgsError::AmbiguousOutSyntax { ref plugin, ref value } if plugin == "foo" && value == "a:b:c"
    ));
}

#[test]
fn repeated_out_in_one_vector_is_duplicate() {
    let err = resolve_args(&raw_args(&["--foo_out=a", "--foo_out=b", "x.proto"])).unwrap_err();
    assert!(matches!(err, ArgsError::DuplicateOut { ref plugin } if plugin == "foo"));
}

#[test]
fn repeated_opt_in_one_vector_is_duplicate() {
    let err = resolve_args(&raw_args(&["--go_out=g", "--go_opt=a", "--go_opt=b", "x.proto"]))
        .unwrap_err();
    assert!(matches!(err, ArgsError::DuplicateOptions { ref plugin } if plugin == "go"));
    assert_eq!(err.to_string(), "duplicate --go_opt");
}

#[test]
fn opt_without_out() {
    let err = resolve_args(&raw_args(&["--foo_opt=x", "a.proto"])).unwrap_err();
    assert!(matches!(err, ArgsError::OptWithoutOut { ref plugin } if plugin == "foo"));
}

#[test]
fn many_plugins_and_hyphenated_names() {
    let env = resolve_args(&raw_args(&[
        "--go_out=gen/go",
        "--go-grpc_out=require_unimplemented_servers=false:gen/go",
        "--java_out",
        "gen/java",
        "--descriptor_set_out=image.bin",
        "a.proto",
    ]))
    .unwrap();
    assert_eq!(env.plugins.len(), 3);
    assert_eq!(env.plugins["go"].out, "gen/go");
    assert_eq!(
        env.plugins["go-grpc"].opt.as_deref(),
        Some("require_unimplemented_servers=false")
    );
    assert_eq!(env.plugins["java"].out, "gen/java");
    assert_eq!(env.output.as_deref(), Some("image.bin"));
}

// =============================================================================
// PLUGIN PATHS
// =============================================================================

#[test]
fn bare_and_named_plugin_paths_share_a_key() {
    let bare = resolve_args(&raw_args(&[
        "--plugin=protoc-gen-foo",
        "--foo_out=gen",
        "a.proto",
    ]))
    .unwrap();
    assert_eq!(bare.plugins["foo"].path.as_deref(), Some("protoc-gen-foo"));

    let named = resolve_args(&raw_args(&[
        "--plugin=protoc-gen-foo=path/to/foo",
        "--foo_out=gen",
        "a.proto",
    ]))
    .unwrap();
    assert_eq!(named.plugins["foo"].path.as_deref(), Some("path/to/foo"));

    let err = resolve_args(&raw_args(&[
        "--plugin=protoc-gen-foo",
        "--plugin=protoc-gen-foo=path/to/foo",
        "--foo_out=gen",
        "a.proto",
    ]))
    .unwrap_err();
    assert!(matches!(err, ArgsError::DuplicatePluginPath { ref plugin, .. } if plugin == "foo"));
}

#[test]
fn plugin_path_without_prefix() {
    let err = resolve_args(&raw_args(&["--plugin=bin/gen-foo", "a.proto"])).unwrap_err();
    assert!(matches!(
        err,
        ArgsError::InvalidPluginNamePrefix { ref name, .. } if name == "gen-foo"
    ));
}

#[test]
fn plugin_path_without_out() {
    let err = resolve_args(&raw_args(&["--plugin=bin/protoc-gen-foo", "a.proto"])).unwrap_err();
    assert!(matches!(err, ArgsError::PathWithoutOut { ref plugin, .. } if plugin == "foo"));
}

// =============================================================================
// UNSUPPORTED & MALFORMED FLAGS
// =============================================================================

#[test]
fn legacy_flags_are_rejected_by_name() {
    let cases: [(&[&str], UnsupportedFlag); 4] = [
        (&["--encode=pkg.Msg"], UnsupportedFlag::Encode),
        (&["--decode", "pkg.Msg"], UnsupportedFlag::Decode),
        (&["--decode_raw"], UnsupportedFlag::DecodeRaw),
        (&["--descriptor_set_in=a.bin"], UnsupportedFlag::DescriptorSetIn),
    ];
    for (flags, expected) in cases {
        let mut args = raw_args(flags);
        args.push("a.proto".into());
        let err = resolve_args(&args).unwrap_err();
        assert!(
            matches!(err, ArgsError::UnsupportedFeature { flag } if flag == expected),
            "{flags:?} gave {err:?}"
        );
    }
}

#[test]
fn unsupported_is_reported_before_missing_inputs() {
    let err = resolve_args(&raw_args(&["--decode_raw"])).unwrap_err();
    assert_eq!(err.kind(), "unsupported_feature");
}

#[test]
fn unknown_flag() {
    let err = resolve_args(&raw_args(&["--cpp_outt", "a.proto"]));
    // "_outt" is not a directive suffix, so this is an unknown built-in flag.
    assert!(matches!(err, Err(ArgsError::UnknownFlag { ref flag }) if flag == "--cpp_outt"));
}
