//! The literal prompt blocks the rewriter looks for and substitutes.
//!
//! `TARGET` is the stock Debian/Ubuntu `.bashrc` prompt block; `REPLACEMENT`
//! is the same block with a `parse_git_branch` helper prepended and both
//! `PS1` assignments extended to call it. The backslash escapes are part of
//! the file contents, not of these source strings, so raw strings reproduce
//! the blocks byte for byte.

pub const TARGET: &str = r#"if [ "$color_prompt" = yes ]; then
    PS1='${debian_chroot:+($debian_chroot)}\[\033[01;32m\]\u@\h\[\033[00m\]:\[\033[01;34m\]\w\[\033[00m\]\$ '
else
    PS1='${debian_chroot:+($debian_chroot)}\u@\h:\w\$ '
fi
unset color_prompt force_color_prompt"#;

pub const REPLACEMENT: &str = r#"parse_git_branch() {
    git branch 2> /dev/null | sed -e '/^[^*]/d' -e 's/* \(.*\)/(\1)/'
}
if [ "$color_prompt" = yes ]; then
    PS1='${debian_chroot:+($debian_chroot)}\[\033[01;32m\]\u@\h\[\033[00m\]:\[\033[01;34m\]\w\[\033[01;31m\]$(parse_git_branch)\[\033[00m\]\$ '
else
    PS1='${debian_chroot:+($debian_chroot)}\u@\h:\w$(parse_git_branch)\$ '
fi
unset color_prompt force_color_prompt"#;
