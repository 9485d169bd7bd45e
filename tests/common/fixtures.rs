//! Test fixtures - reusable file contents.

#![allow(dead_code)]

/// Relative path patched when no `--file` is given
pub const PLAYER_PAGE_PATH: &str = "src/pages/player/index.vue";

/// Player page referencing the default cover twice
pub const PLAYER_PAGE: &str = r#"<template>
  <view class="player">
    <image class="cover" :src="song.cover || '/static/default_cover.png'" mode="aspectFill" />
  </view>
</template>

<script setup>
const fallbackCover = '/static/default_cover.png'
</script>
"#;

/// `PLAYER_PAGE` after the built-in rule
pub const PLAYER_PAGE_PATCHED: &str = r#"<template>
  <view class="player">
    <image class="cover" :src="song.cover || ''" mode="aspectFill" />
  </view>
</template>

<script setup>
const fallbackCover = ''
</script>
"#;

/// Page without any default cover reference
pub const PLAIN_PAGE: &str = "<template>\n  <view>播放器</view>\n</template>\n";
