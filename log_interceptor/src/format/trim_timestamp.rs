// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Removes a leading `[HH:MM:SS]` timestamp, the prefix that gulp style loggers put in
//! front of every line. Loggers usually color the time portion, eg:
//! `[\x1b[90m12:00:00\x1b[39m] message`, so there is a second, color tolerant parser.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while, take_while_m_n},
          combinator::{map_res, recognize, verify},
          multi::many0_count};

const MAX_HOURS: u8 = 23;
const MAX_MINUTES_OR_SECONDS: u8 = 59;
const SEPARATOR: char = ' ';

/// Removes a timestamp of the form `[HH:MM:SS]` from the start of `text`, along with
/// exactly one separator space after it (if present).
///
/// - Hours must be `00` - `23`, minutes and seconds `00` - `59`.
/// - The match is anchored to the start of `text`. A timestamp anywhere else is left
///   alone.
/// - When `check_color` is `true` and the plain form does not match, the match is retried
///   allowing ANSI SGR (color) sequences around the brackets and around the time digits.
///   Pass `false` when the colors have already been stripped.
///
/// Returns `text` unchanged when nothing matches.
///
/// ```
/// use r3bl_log_interceptor::trim_timestamp;
///
/// assert_eq!(trim_timestamp("[09:15:00] hello", true), "hello");
/// assert_eq!(trim_timestamp("[\x1b[90m09:15:00\x1b[39m] hello", true), "hello");
/// assert_eq!(trim_timestamp("[\x1b[90m09:15:00\x1b[39m] hello", false),
///            "[\x1b[90m09:15:00\x1b[39m] hello");
/// assert_eq!(trim_timestamp("hello [09:15:00]", true), "hello [09:15:00]");
/// ```
#[must_use]
pub fn trim_timestamp(text: &str, check_color: bool) -> &str {
    let remainder = match parse_plain_timestamp(text) {
        Ok((remainder, _)) => remainder,
        Err(_) if check_color => match parse_colored_timestamp(text) {
            Ok((remainder, _)) => remainder,
            Err(_) => return text,
        },
        Err(_) => return text,
    };
    remainder.strip_prefix(SEPARATOR).unwrap_or(remainder)
}

/// Matches `[HH:MM:SS]` and outputs the matched text.
#[rustfmt::skip]
fn parse_plain_timestamp(input: &str) -> IResult<&str, &str> {
    recognize(
        (tag("["), parse_time, tag("]"))
    ).parse(input)
}

/// Matches `[HH:MM:SS]` with zero or more SGR sequences before and after each bracket,
/// and outputs the matched text.
#[rustfmt::skip]
fn parse_colored_timestamp(input: &str) -> IResult<&str, &str> {
    recognize(
        (
            skip_sgr_sequences, tag("["), skip_sgr_sequences,
            parse_time,
            skip_sgr_sequences, tag("]"), skip_sgr_sequences,
        )
    ).parse(input)
}

/// Matches `HH:MM:SS` and outputs `(hours, minutes, seconds)`.
#[rustfmt::skip]
fn parse_time(input: &str) -> IResult<&str, (u8, u8, u8)> {
    let (input, (hours, _, minutes, _, seconds)) = (
        parse_hours,
        tag(":"),
        parse_minutes_or_seconds,
        tag(":"),
        parse_minutes_or_seconds,
    )
        .parse(input)?;
    Ok((input, (hours, minutes, seconds)))
}

fn parse_hours(input: &str) -> IResult<&str, u8> {
    parse_two_digits_at_most(input, MAX_HOURS)
}

fn parse_minutes_or_seconds(input: &str) -> IResult<&str, u8> {
    parse_two_digits_at_most(input, MAX_MINUTES_OR_SECONDS)
}

#[rustfmt::skip]
fn parse_two_digits_at_most(input: &str, max: u8) -> IResult<&str, u8> {
    verify(
        map_res(
            take_while_m_n(2, 2, |it: char| it.is_ascii_digit()),
            str::parse::<u8>,
        ),
        move |it: &u8| *it <= max,
    ).parse(input)
}

/// Consumes any number of `ESC [ <params> m` sequences.
#[rustfmt::skip]
fn skip_sgr_sequences(input: &str) -> IResult<&str, usize> {
    many0_count(
        (
            tag("\x1b["),
            take_while(|it: char| it.is_ascii_digit() || it == ';'),
            tag("m"),
        )
    ).parse(input)
}
